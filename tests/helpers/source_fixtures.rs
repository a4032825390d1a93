//! Shared RDDL sources and their parsed models.
//!
//! Both fixtures are parsed and built once; tests borrow the result.

use once_cell::sync::Lazy;
use rddl::Rddl;

/// A reservoir-control domain: object types, all four fluent kinds,
/// aggregations, quantifiers, and a Gamma rainfall model.
pub static RESERVOIR: &str = r#"domain reservoir {
    requirements = {
        concurrent,
        reward-deterministic,
        intermediate-nodes,
        constrained-state
    };

    types {
        res: object;
        picture-point: object;
        crowdlevel: {@low, @med, @high};
        enum_level: {@low, @high};
    };

    pvariables {
        MAX_RES_CAP(res): { non-fluent, real, default = 100.0 };
        UPPER_BOUND(res): { non-fluent, real, default = 80.0 };
        LOWER_BOUND(res): { non-fluent, real, default = 20.0 };
        RAIN_SHAPE(res):  { non-fluent, real, default = 25.0 };
        RAIN_SCALE(res):  { non-fluent, real, default = 25.0 };
        DOWNSTREAM(res,res): { non-fluent, bool, default = false };
        SINK_RES(res):    { non-fluent, bool, default = false };
        MAX_WATER_EVAP_FRAC_PER_TIME_UNIT: { non-fluent, real, default = 0.05 };
        LOW_PENALTY(res) : { non-fluent, real, default =  -5.0 };
        HIGH_PENALTY(res): { non-fluent, real, default = -10.0 };

        rlevel(res): { state-fluent, real, default = 50.0 };

        outflow(res): { action-fluent, real, default = 0.0 };

        evaporated(res): { interm-fluent, real, level = 1 };
        rainfall(res):   { interm-fluent, real, level = 1 };
        overflow(res):   { interm-fluent, real, level = 2 };
        inflow(res):     { interm-fluent, real, level = 1 };
    };

    cpfs {
        evaporated(?r) = MAX_WATER_EVAP_FRAC_PER_TIME_UNIT
                         * [(rlevel(?r) * rlevel(?r)) / (MAX_RES_CAP(?r) * MAX_RES_CAP(?r))]
                         * rlevel(?r);

        rainfall(?r) = Gamma(RAIN_SHAPE(?r), RAIN_SCALE(?r));

        inflow(?r) = sum_{?up : res} [DOWNSTREAM(?up,?r) * (outflow(?up) + overflow(?up))];

        overflow(?r) = max[0, rlevel(?r) - outflow(?r) - MAX_RES_CAP(?r)];

        rlevel'(?r) = rlevel(?r) + rainfall(?r) - evaporated(?r)
                      - outflow(?r) - overflow(?r) + inflow(?r);
    };

    reward = sum_{?r : res} [if (rlevel'(?r) >= LOWER_BOUND(?r) ^ (rlevel'(?r) <= UPPER_BOUND(?r)))
                             then 0
                             else if (rlevel'(?r) <= LOWER_BOUND(?r))
                                 then LOW_PENALTY(?r) * (LOWER_BOUND(?r) - rlevel'(?r))
                                 else HIGH_PENALTY(?r) * (rlevel'(?r) - UPPER_BOUND(?r))];

    action-preconditions {
        forall_{?r : res} outflow(?r) <= rlevel(?r);
        forall_{?r : res} outflow(?r) >= 0;
    };

    state-action-constraints {
        forall_{?up : res} (sum_{?down : res} DOWNSTREAM(?up,?down)) <= 1;
    };

    state-invariants {
        forall_{?r : res} rlevel(?r) >= 0;
    };
}

non-fluents res8 {
    domain = reservoir;
    objects {
        res: {t1,t2,t3,t4,t5,t6,t7,t8};
        picture-point: {p1, p2, p3};
    };
    non-fluents {
        RAIN_SHAPE(t1) = 1.0;
        RAIN_SCALE(t1) = 5.0;
        MAX_RES_CAP(t3) = 200.0;
        DOWNSTREAM(t1,t2);
        DOWNSTREAM(t2,t3);
        ~SINK_RES(t1);
        SINK_RES(t8);
    };
}

instance inst_reservoir_res8 {
    domain = reservoir;
    non-fluents = res8;
    init-state {
        rlevel(t1) = 75.0;
    };
    max-nondef-actions = pos-inf;
    horizon = 40;
    discount = 0.9;
}"#;

/// A rover domain with only nullary and unary fluents and no
/// interm-fluents.
pub static MARS_ROVER: &str = r#"domain mars_rover {
    requirements = { concurrent, continuous };

    types {
        picture-point: object;
    };

    pvariables {
        MAX_TIME:           { non-fluent, real, default = 12.0 };
        MOVE_VARIANCE_MULT: { non-fluent, real, default = 0.5 };
        PICT_XPOS(picture-point): { non-fluent, real, default = 0.0 };
        PICT_YPOS(picture-point): { non-fluent, real, default = 0.0 };
        PICT_VALUE(picture-point): { non-fluent, real, default = 1.0 };
        PICT_ERROR_ALLOW(picture-point): { non-fluent, real, default = 0.5 };

        xPos: { state-fluent, real, default = 0.0 };
        yPos: { state-fluent, real, default = 0.0 };
        time: { state-fluent, real, default = 0.0 };
        picTaken(picture-point): { state-fluent, bool, default = false };

        xMove: { action-fluent, real, default = 0.0 };
        yMove: { action-fluent, real, default = 0.0 };
        snapPicture: { action-fluent, bool, default = false };
    };

    cpfs {
        xPos' = xPos + xMove + Normal(0.0, MOVE_VARIANCE_MULT * abs[xMove]);
        yPos' = yPos + yMove + Normal(0.0, MOVE_VARIANCE_MULT * abs[yMove]);

        time' = if (snapPicture) then (time + 0.25)
                else (time + abs[xMove] + abs[yMove]);

        picTaken'(?p) = picTaken(?p) | [snapPicture ^ (time <= MAX_TIME)
                        & (abs[xPos - PICT_XPOS(?p)] <= PICT_ERROR_ALLOW(?p))
                        ^ (abs[yPos - PICT_YPOS(?p)] <= PICT_ERROR_ALLOW(?p))];
    };

    reward = sum_{?p : picture-point} [(~picTaken(?p) ^ picTaken'(?p)) * PICT_VALUE(?p)];

    action-preconditions {
        snapPicture => ((xMove == 0.0) ^ (yMove == 0.0));
    };
}

non-fluents pics3 {
    domain = mars_rover;
    objects {
        picture-point: {p1, p2, p3};
    };
    non-fluents {
        MAX_TIME = 12.0;
        PICT_XPOS(p1) = 1.0;
        PICT_YPOS(p1) = -1.0;
        PICT_VALUE(p2) = 5.0;
    };
}

instance inst_mars_rover {
    domain = mars_rover;
    non-fluents = pics3;
    init-state {
        picTaken(p1) = true;
        picTaken(p3) = false;
        xPos = 0.0;
    };
    max-nondef-actions = 1;
    horizon = 20;
    discount = 1.0;
}"#;

static RESERVOIR_RDDL: Lazy<Rddl> = Lazy::new(|| {
    let mut rddl = rddl::parse_rddl(RESERVOIR).expect("reservoir fixture parses");
    rddl.build().expect("reservoir fixture builds");
    rddl
});

static MARS_ROVER_RDDL: Lazy<Rddl> = Lazy::new(|| {
    let mut rddl = rddl::parse_rddl(MARS_ROVER).expect("mars rover fixture parses");
    rddl.build().expect("mars rover fixture builds");
    rddl
});

pub fn reservoir() -> &'static Rddl {
    &RESERVOIR_RDDL
}

pub fn mars_rover() -> &'static Rddl {
    &MARS_ROVER_RDDL
}

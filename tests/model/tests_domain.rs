//! Fluent classification and CPF ordering queries.

use crate::helpers::{mars_rover, reservoir};
use rddl::naming;
use std::collections::BTreeSet;

fn keys(map: &rustc_hash::FxHashMap<String, &rddl::PVariable>) -> BTreeSet<String> {
    map.keys().cloned().collect()
}

fn set(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|name| name.to_string()).collect()
}

#[test]
fn test_reservoir_classification() {
    let domain = &reservoir().domain;
    assert_eq!(keys(&domain.state_fluents()), set(&["rlevel/1"]));
    assert_eq!(keys(&domain.action_fluents()), set(&["outflow/1"]));
    assert_eq!(
        keys(&domain.intermediate_fluents()),
        set(&["evaporated/1", "rainfall/1", "overflow/1", "inflow/1"])
    );
    assert_eq!(
        keys(&domain.non_fluents()),
        set(&[
            "MAX_RES_CAP/1",
            "UPPER_BOUND/1",
            "LOWER_BOUND/1",
            "RAIN_SHAPE/1",
            "RAIN_SCALE/1",
            "DOWNSTREAM/2",
            "SINK_RES/1",
            "MAX_WATER_EVAP_FRAC_PER_TIME_UNIT/0",
            "LOW_PENALTY/1",
            "HIGH_PENALTY/1",
        ])
    );
}

#[test]
fn test_mars_rover_classification() {
    let domain = &mars_rover().domain;
    assert_eq!(
        keys(&domain.state_fluents()),
        set(&["xPos/0", "yPos/0", "time/0", "picTaken/1"])
    );
    assert_eq!(
        keys(&domain.action_fluents()),
        set(&["xMove/0", "yMove/0", "snapPicture/0"])
    );
    assert!(domain.intermediate_fluents().is_empty());
}

#[test]
fn test_classification_is_disjoint() {
    let domain = &reservoir().domain;
    let states = keys(&domain.state_fluents());
    let actions = keys(&domain.action_fluents());
    let interm = keys(&domain.intermediate_fluents());
    let constants = keys(&domain.non_fluents());
    assert!(states.is_disjoint(&actions));
    assert!(states.is_disjoint(&interm));
    assert!(states.is_disjoint(&constants));
    assert!(interm.is_disjoint(&constants));
    assert_eq!(
        states.len() + actions.len() + interm.len() + constants.len(),
        domain.pvariables.len()
    );
}

#[test]
fn test_intermediate_cpfs_sorted_by_level_then_name() {
    let domain = &reservoir().domain;
    let cpfs = domain.intermediate_cpfs();
    let names: Vec<String> = cpfs.iter().map(|cpf| cpf.name()).collect();
    // Three level-1 fluents in name order, then the level-2 overflow.
    assert_eq!(names, [
        "evaporated/1",
        "inflow/1",
        "rainfall/1",
        "overflow/1"
    ]);

    let interm = domain.intermediate_fluents();
    let levels: Vec<i64> = cpfs
        .iter()
        .map(|cpf| interm[&cpf.name()].level.unwrap())
        .collect();
    let mut sorted = levels.clone();
    sorted.sort();
    assert_eq!(levels, sorted);
}

#[test]
fn test_state_cpfs_strip_to_declared_state_fluents() {
    let domain = &reservoir().domain;
    let cpfs = domain.state_cpfs();
    let names: Vec<String> = cpfs.iter().map(|cpf| cpf.name()).collect();
    assert_eq!(names, ["rlevel'/1"]);

    let states = domain.state_fluents();
    for cpf in &cpfs {
        let current = naming::current_of(&cpf.name()).unwrap();
        assert!(states.contains_key(&current));
    }
}

#[test]
fn test_state_cpfs_sorted_by_name() {
    let domain = &mars_rover().domain;
    let names: Vec<String> = domain
        .state_cpfs()
        .iter()
        .map(|cpf| cpf.name())
        .collect();
    assert_eq!(names, ["picTaken'/1", "time'/0", "xPos'/0", "yPos'/0"]);
    assert_eq!(domain.state_cpfs().len(), domain.state_fluents().len());
}

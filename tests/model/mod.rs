mod tests_domain;

use vaultseed_profile::{Distribution, Permission, ProfileError};

fn equal_permissions() -> Distribution<Permission> {
    Distribution::new(vec![
        (Permission::ReadOnly, 0.25),
        (Permission::ReadWrite, 0.25),
        (Permission::Manage, 0.25),
        (Permission::HidePasswords, 0.25),
    ])
}

fn counts(dist: &Distribution<char>, total: usize) -> Vec<(char, usize)> {
    let mut tally: Vec<(char, usize)> = dist
        .entries()
        .iter()
        .map(|(category, _)| (*category, 0))
        .collect();
    for index in 0..total {
        let selected = dist.select(index, total);
        for (category, count) in tally.iter_mut() {
            if *category == selected {
                *count += 1;
            }
        }
    }
    tally
}

#[test]
fn equal_weights_split_a_hundred_exactly() {
    let dist = equal_permissions();
    let mut read_only = 0;
    let mut read_write = 0;
    let mut manage = 0;
    let mut hide = 0;
    for index in 0..100 {
        match dist.select(index, 100) {
            Permission::ReadOnly => read_only += 1,
            Permission::ReadWrite => read_write += 1,
            Permission::Manage => manage += 1,
            Permission::HidePasswords => hide += 1,
        }
    }
    assert_eq!((read_only, read_write, manage, hide), (25, 25, 25, 25));
}

#[test]
fn unnormalized_weights_are_scaled_by_their_sum() {
    let dist = Distribution::new(vec![('a', 2.0), ('b', 1.0), ('c', 1.0)]);
    assert_eq!(counts(&dist, 8), vec![('a', 4), ('b', 2), ('c', 2)]);
}

#[test]
fn selection_is_deterministic() {
    let dist = Distribution::new(vec![('x', 0.7), ('y', 0.3)]);
    for index in 0..50 {
        assert_eq!(dist.select(index, 50), dist.select(index, 50));
    }
}

#[test]
fn single_category_always_wins() {
    let dist = Distribution::new(vec![('z', 42.0)]);
    for index in 0..10 {
        assert_eq!(dist.select(index, 10), 'z');
    }
}

#[test]
fn final_positions_land_in_the_last_category() {
    let dist = equal_permissions();
    assert_eq!(dist.select(99, 100), Permission::HidePasswords);
}

#[test]
fn validate_rejects_malformed_weights() {
    let empty: Distribution<char> = Distribution::new(Vec::new());
    assert!(matches!(
        empty.validate(),
        Err(ProfileError::Distribution(_))
    ));

    let negative = Distribution::new(vec![('a', 1.0), ('b', -0.5)]);
    assert!(matches!(
        negative.validate(),
        Err(ProfileError::Distribution(_))
    ));

    let zero_sum = Distribution::new(vec![('a', 0.0), ('b', 0.0)]);
    assert!(matches!(
        zero_sum.validate(),
        Err(ProfileError::Distribution(_))
    ));

    assert!(Distribution::new(vec![('a', 3.0), ('b', 1.0)]).validate().is_ok());
}

#![cfg(test)]
extern crate std;

use crate::tests::sut::{
    create_price_feed_contract, create_token_contract, init_hub, no_underlying,
};
use crate::*;
use soroban_sdk::testutils::{Address as _, AuthorizedFunction, AuthorizedInvocation};
use soroban_sdk::{vec, IntoVal, Symbol};

#[test]
fn should_require_permission() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_hub(&env);
    let token = create_token_contract(&env, 7);
    let feed = create_price_feed_contract(&env, 8, 100_000_000, &[0, 10, 20]);

    let inputs = vec![
        &env,
        OracleInput {
            token: token.clone(),
            feed: feed.address.clone(),
            underlying_feed_tokens: no_underlying(&env),
        },
    ];

    let add_oracle_owner = Address::generate(&env);
    sut.hub
        .grant_permission(&sut.admin, &add_oracle_owner, &Permission::AddOracle);

    sut.hub.add_oracle_bulk(&add_oracle_owner, &inputs);

    assert_eq!(
        env.auths(),
        [(
            add_oracle_owner.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    sut.hub.address.clone(),
                    Symbol::new(&env, "add_oracle_bulk"),
                    vec![
                        &env,
                        add_oracle_owner.into_val(&env),
                        inputs.into_val(&env)
                    ]
                )),
                sub_invocations: std::vec![]
            }
        )]
    );
}

#[test]
fn should_add_oracles_in_order() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_hub(&env);

    let token_1 = create_token_contract(&env, 6);
    let token_2 = create_token_contract(&env, 24);
    let derivative = create_token_contract(&env, 18);

    let feed_1 = create_price_feed_contract(&env, 8, 100_000_000, &[0, 10, 25, 80, 95]);
    let feed_2 = create_price_feed_contract(&env, 8, 200_000_000, &[0, 60, 120, 180]);
    let feed_3 = create_price_feed_contract(&env, 18, 1_000_000_000_000_000_000, &[0, 5]);

    let inputs = vec![
        &env,
        OracleInput {
            token: token_1.clone(),
            feed: feed_1.address.clone(),
            underlying_feed_tokens: no_underlying(&env),
        },
        OracleInput {
            token: token_2.clone(),
            feed: feed_2.address.clone(),
            underlying_feed_tokens: no_underlying(&env),
        },
        // constituents registered earlier in the same batch
        OracleInput {
            token: derivative.clone(),
            feed: feed_3.address.clone(),
            underlying_feed_tokens: vec![&env, token_1.clone(), token_2.clone()],
        },
    ];

    sut.hub.add_oracle_bulk(&sut.admin, &inputs);

    let entry_1 = sut.hub.price_feed(&token_1).unwrap();
    let entry_2 = sut.hub.price_feed(&token_2).unwrap();
    let entry_3 = sut.hub.price_feed(&derivative).unwrap();

    assert_eq!(entry_1.feed, feed_1.address);
    assert_eq!(entry_1.token_decimals, 6);
    assert_eq!(entry_1.heartbeat, 15);

    assert_eq!(entry_2.feed, feed_2.address);
    assert_eq!(entry_2.token_decimals, 24);
    assert_eq!(entry_2.heartbeat, 60);

    assert_eq!(entry_3.feed, feed_3.address);
    assert_eq!(entry_3.feed_decimals, 18);
    assert_eq!(entry_3.heartbeat, sut.hub.default_heartbeat());
    assert_eq!(
        entry_3.underlying_feed_tokens,
        vec![&env, token_1, token_2]
    );
}

#[test]
fn should_not_add_any_oracle_when_one_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_hub(&env);

    let token_1 = create_token_contract(&env, 7);
    let token_2 = create_token_contract(&env, 7);

    let feed_1 = create_price_feed_contract(&env, 8, 100_000_000, &[0, 10, 20]);
    let feed_2 = create_price_feed_contract(&env, 8, 100_000_000, &[0, 10, 20]);

    let inputs = vec![
        &env,
        OracleInput {
            token: token_1.clone(),
            feed: feed_1.address.clone(),
            underlying_feed_tokens: no_underlying(&env),
        },
        OracleInput {
            token: token_2.clone(),
            feed: feed_2.address.clone(),
            underlying_feed_tokens: no_underlying(&env),
        },
        OracleInput {
            token: token_1.clone(),
            feed: feed_2.address.clone(),
            underlying_feed_tokens: no_underlying(&env),
        },
    ];

    let result = sut.hub.try_add_oracle_bulk(&sut.admin, &inputs);

    assert_eq!(result, Err(Ok(Error::AlreadyRegistered)));
    assert!(sut.hub.price_feed(&token_1).is_none());
    assert!(sut.hub.price_feed(&token_2).is_none());
}

#[test]
fn should_not_add_any_oracle_when_feed_is_empty() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_hub(&env);

    let token_1 = create_token_contract(&env, 7);
    let token_2 = create_token_contract(&env, 7);

    let feed_1 = create_price_feed_contract(&env, 8, 100_000_000, &[0, 10, 20]);
    let empty_feed = create_price_feed_contract(&env, 8, 100_000_000, &[]);

    let inputs = vec![
        &env,
        OracleInput {
            token: token_1.clone(),
            feed: feed_1.address.clone(),
            underlying_feed_tokens: no_underlying(&env),
        },
        OracleInput {
            token: token_2.clone(),
            feed: empty_feed.address.clone(),
            underlying_feed_tokens: no_underlying(&env),
        },
    ];

    let result = sut.hub.try_add_oracle_bulk(&sut.admin, &inputs);

    assert_eq!(result, Err(Ok(Error::NoPriceForAsset)));
    assert!(sut.hub.price_feed(&token_1).is_none());
    assert!(sut.hub.price_feed(&token_2).is_none());
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #2)")]
fn should_fail_if_permission_revoked() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_hub(&env);
    let token = create_token_contract(&env, 7);
    let feed = create_price_feed_contract(&env, 8, 100_000_000, &[0, 10, 20]);

    let revoked = Address::generate(&env);
    sut.hub
        .grant_permission(&sut.admin, &revoked, &Permission::AddOracle);
    sut.hub
        .revoke_permission(&sut.admin, &revoked, &Permission::AddOracle);

    sut.hub.add_oracle_bulk(
        &revoked,
        &vec![
            &env,
            OracleInput {
                token,
                feed: feed.address.clone(),
                underlying_feed_tokens: no_underlying(&env),
            },
        ],
    );
}

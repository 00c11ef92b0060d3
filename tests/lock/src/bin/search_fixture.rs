//! Binary that runs the lock scenarios through the harness runner and
//! prints deterministic output lines for cross-process verification.
//!
//! Usage: `search_fixture [POLICY_JSON]`
//!
//! Without an argument every strategy is run with its default depth limit.
//! With a policy document only that policy is run.
//!
//! Output: one `key=value` line per field, grouped by scenario.

use lock_tests::scenarios;
use treesearch::policy::{SearchPolicy, Strategy};
use treesearch_harness::domains::cities::CityMap;
use treesearch_harness::domains::linear_chain::LinearChain;
use treesearch_harness::report::SearchReportV1;
use treesearch_harness::runner::run_search;

fn print_report(scenario: &str, report: &SearchReportV1) {
    let path = report
        .path
        .as_ref()
        .map_or_else(|| "none".to_string(), |p| p.join(","));
    println!("{scenario}.strategy={}", report.policy.strategy);
    println!("{scenario}.path={path}");
    println!(
        "{scenario}.expanded={}",
        report.trace.expanded_states().join(",")
    );
    println!("{scenario}.digest={}", report.digest().expect("report digest"));
}

fn main() {
    let policies: Vec<SearchPolicy> = match std::env::args().nth(1) {
        Some(json) => vec![SearchPolicy::from_json_str(&json).expect("invalid policy JSON")],
        None => Strategy::ALL
            .iter()
            .map(|s| SearchPolicy {
                strategy: *s,
                ..SearchPolicy::default()
            })
            .collect(),
    };

    for policy in &policies {
        let tag = policy.strategy.as_str();

        let chain = run_search(&LinearChain::new(3), 0, 3, policy).expect("chain run");
        print_report(&format!("chain.{tag}"), &chain);

        let fork = run_search(&scenarios::fork(), "A", "G", policy).expect("fork run");
        print_report(&format!("fork.{tag}"), &fork);

        let shallow = SearchPolicy {
            depth_limit: policy.depth_limit.min(4),
            ..*policy
        };
        let cities =
            run_search(&CityMap::portugal(), "Coimbra", "Evora", &shallow).expect("cities run");
        print_report(&format!("cities.{tag}"), &cities);
    }
}

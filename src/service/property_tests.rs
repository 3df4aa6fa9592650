//! Property-Based Tests for the employee aggregates
//!
//! Uses proptest to check the search, max and top-ten views against
//! arbitrary employee lists.

use proptest::prelude::*;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::Employee;
use crate::service::aggregate::{
    filter_by_name, highest_salary, top_earner_names, validate_search, TOP_EARNERS_LIMIT,
};

// == Strategies ==
fn employee_strategy() -> impl Strategy<Value = Employee> {
    ("[A-Za-z]{1,12}( [A-Za-z]{1,12})?", 0u64..500_000, 16u32..=75).prop_map(
        |(name, salary, age)| Employee {
            id: Uuid::nil(),
            name,
            salary,
            age,
            title: "Engineer".to_string(),
            email: "someone@company.com".to_string(),
        },
    )
}

fn employees_strategy() -> impl Strategy<Value = Vec<Employee>> {
    prop::collection::vec(employee_strategy(), 0..40)
}

/// Search strings holding at least one non-letter somewhere.
fn invalid_search_strategy() -> impl Strategy<Value = String> {
    ("[A-Za-z]{0,6}", "[0-9@#$%&*!._-]", "[A-Za-z]{0,6}")
        .prop_map(|(head, bad, tail)| format!("{}{}{}", head, bad, tail))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_top_ten_length_and_order(employees in employees_strategy()) {
        let names = top_earner_names(&employees, TOP_EARNERS_LIMIT);
        prop_assert_eq!(names.len(), employees.len().min(TOP_EARNERS_LIMIT));

        // Map each returned name back to a salary, consuming matches in order
        let mut remaining: Vec<&Employee> = employees.iter().collect();
        let mut salaries = Vec::new();
        for name in &names {
            let best = remaining
                .iter()
                .enumerate()
                .filter(|(_, e)| &e.name == name)
                .max_by(|(ia, a), (ib, b)| a.salary.cmp(&b.salary).then(ib.cmp(ia)))
                .map(|(i, _)| i);
            let index = best.expect("returned name must exist in input");
            salaries.push(remaining.remove(index).salary);
        }
        prop_assert!(salaries.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn prop_top_ten_first_is_highest(employees in employees_strategy()) {
        let names = top_earner_names(&employees, TOP_EARNERS_LIMIT);
        let max = highest_salary(&employees);
        if let Some(first) = names.first() {
            prop_assert!(employees.iter().any(|e| &e.name == first && e.salary == max));
        } else {
            prop_assert_eq!(max, 0);
        }
    }

    #[test]
    fn prop_highest_salary_is_max(employees in employees_strategy()) {
        let max = highest_salary(&employees);
        prop_assert!(employees.iter().all(|e| e.salary <= max));
        if !employees.is_empty() {
            prop_assert!(employees.iter().any(|e| e.salary == max));
        }
    }

    #[test]
    fn prop_invalid_search_rejected_in_any_case(search in invalid_search_strategy()) {
        for candidate in [search.clone(), search.to_uppercase(), search.to_lowercase()] {
            prop_assert!(matches!(
                validate_search(&candidate),
                Err(ApiError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn prop_search_is_case_insensitive(
        employees in employees_strategy(),
        needle in "[A-Za-z]{1,3}",
    ) {
        let lower = filter_by_name(employees.clone(), &needle.to_lowercase());
        let upper = filter_by_name(employees.clone(), &needle.to_uppercase());
        prop_assert_eq!(&lower, &upper);
        prop_assert!(lower.len() <= employees.len());
    }
}

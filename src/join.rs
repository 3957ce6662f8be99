// 🔗 Inner join on canonical geography

use crate::geography::is_national;
use crate::tables::{EducationRow, IncomeRow, VacancyRow};

/// A row that can be joined by its canonical province name
pub trait Keyed {
    fn geography(&self) -> &str;
}

impl Keyed for VacancyRow {
    fn geography(&self) -> &str {
        &self.geography
    }
}

impl Keyed for EducationRow {
    fn geography(&self) -> &str {
        &self.geography
    }
}

impl Keyed for IncomeRow {
    fn geography(&self) -> &str {
        &self.province
    }
}

/// Pairs of rows sharing a geography, in left-table order
pub type JoinedView<'a, L, R> = Vec<(&'a L, &'a R)>;

/// Inner join; duplicate keys produce every pairing, Canada never appears
pub fn inner_join<'a, L: Keyed, R: Keyed>(left: &'a [L], right: &'a [R]) -> JoinedView<'a, L, R> {
    left.iter()
        .filter(|l| !is_national(l.geography()))
        .flat_map(|l| {
            right
                .iter()
                .filter(move |r| r.geography() == l.geography())
                .map(move |r| (l, r))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vacancy(geo: &str, value: f64) -> VacancyRow {
        VacancyRow {
            geography: geo.to_string(),
            statistics: "Job vacancies 4".to_string(),
            values: vec![Some(value)],
        }
    }

    fn education(geo: &str, pct: f64) -> EducationRow {
        EducationRow {
            geography: geo.to_string(),
            attainment: "Tertiary education".to_string(),
            tertiary_pct: Some(pct),
        }
    }

    #[test]
    fn test_province_missing_on_one_side_is_dropped() {
        let left = vec![vacancy("Alberta", 1.0), vacancy("Ontario", 2.0)];
        let right = vec![education("Ontario", 67.0), education("Manitoba", 55.0)];

        let joined = inner_join(&left, &right);

        assert_eq!(joined.len(), 1);
        assert_eq!(joined[0].0.geography, "Ontario");
        assert_eq!(joined[0].1.tertiary_pct, Some(67.0));
        assert!(joined.iter().all(|(l, _)| l.geography != "Alberta"));
    }

    #[test]
    fn test_canada_excluded_even_when_on_both_sides() {
        let left = vec![vacancy("Canada", 1.0), vacancy("Ontario", 2.0)];
        let right = vec![education("Canada", 60.0), education("Ontario", 67.0)];

        let joined = inner_join(&left, &right);

        assert_eq!(joined.len(), 1);
        assert!(joined.iter().all(|(l, r)| l.geography() != "Canada" && r.geography() != "Canada"));
    }

    #[test]
    fn test_duplicate_keys_pair_up() {
        let left = vec![vacancy("Ontario", 1.0), vacancy("Ontario", 2.0)];
        let right = vec![education("Ontario", 67.0)];

        assert_eq!(inner_join(&left, &right).len(), 2);
    }

    #[test]
    fn test_left_order_preserved() {
        let left = vec![vacancy("Quebec", 1.0), vacancy("Alberta", 2.0)];
        let right = vec![education("Alberta", 70.0), education("Quebec", 58.0)];

        let order: Vec<&str> = inner_join(&left, &right)
            .into_iter()
            .map(|(l, _)| l.geography.as_str())
            .collect();
        assert_eq!(order, vec!["Quebec", "Alberta"]);
    }
}

//! Per-category debt rollups.

use crate::models::{Category, Debt};

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRollup {
    pub category_id: i64,
    pub category_name: String,
    pub count: usize,
    pub total: f64,
    pub unpaid_total: f64,
}

/// For each category: the debts that reference it, their sum and the sum
/// of the still-unpaid ones. Since every debt references an existing
/// category, the rollup totals add up to the whole-collection totals.
pub fn rollup(categories: &[Category], debts: &[Debt]) -> Vec<CategoryRollup> {
    categories
        .iter()
        .map(|cat| {
            let mine: Vec<&Debt> = debts.iter().filter(|d| d.category_id == cat.id).collect();
            CategoryRollup {
                category_id: cat.id,
                category_name: cat.name.clone(),
                count: mine.len(),
                total: mine.iter().map(|d| d.value).sum(),
                unpaid_total: mine.iter().filter(|d| !d.paid).map(|d| d.value).sum(),
            }
        })
        .collect()
}

pub fn total(debts: &[Debt]) -> f64 {
    debts.iter().map(|d| d.value).sum()
}

pub fn unpaid_total(debts: &[Debt]) -> f64 {
    debts.iter().filter(|d| !d.paid).map(|d| d.value).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ColorTag;
    use chrono::NaiveDate;

    fn cat(id: i64, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
            color: ColorTag::Blue,
        }
    }

    fn debt(id: i64, category_id: i64, value: f64, paid: bool) -> Debt {
        Debt {
            id,
            name: format!("debt-{id}"),
            value,
            category_id,
            due: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            paid,
            notes: None,
        }
    }

    #[test]
    fn rollup_totals_match_collection_totals() {
        let cats = vec![cat(1, "home"), cat(2, "car")];
        let debts = vec![
            debt(10, 1, 100.0, false),
            debt(11, 1, 50.0, true),
            debt(12, 2, 30.0, false),
        ];

        let rolled = rollup(&cats, &debts);

        let sum: f64 = rolled.iter().map(|r| r.total).sum();
        let unpaid: f64 = rolled.iter().map(|r| r.unpaid_total).sum();

        assert_eq!(sum, total(&debts));
        assert_eq!(unpaid, unpaid_total(&debts));
        assert_eq!(unpaid, 130.0);
    }

    #[test]
    fn empty_category_rolls_up_to_zero() {
        let cats = vec![cat(1, "empty")];
        let rolled = rollup(&cats, &[]);
        assert_eq!(rolled[0].count, 0);
        assert_eq!(rolled[0].total, 0.0);
    }
}

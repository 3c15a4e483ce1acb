//! Bus-card recharge planning.
//!
//! Employers load transit cards ahead of time, so the question answered
//! here is: given each commuter's priced routes to and from work, how
//! much money does a day, a week, or a whole recharge period need?
//! Commuters without an assigned route are left out of the totals but
//! still counted for coverage.

use crate::domain::FareAmount;

/// Working days per week assumed when the caller does not say otherwise.
pub const DEFAULT_WORKING_DAYS_PER_WEEK: u32 = 5;

/// Months are approximated as four weeks, as the recharge reports do.
pub const WEEKS_PER_MONTH: u32 = 4;

/// The span a recharge should cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RechargePeriod {
    Days(u32),
    Weeks(u32),
}

/// The priced commute of one person: fares for the trip to work and the
/// trip back, each present only when a route is assigned and active.
///
/// A present zero fare still counts as a trip; riding a free service is
/// not the same as having no route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommuteCosts {
    pub to_work: Option<FareAmount>,
    pub from_work: Option<FareAmount>,
}

impl CommuteCosts {
    /// What one working day costs.
    pub fn daily(&self) -> FareAmount {
        self.to_work.unwrap_or(FareAmount::ZERO) + self.from_work.unwrap_or(FareAmount::ZERO)
    }

    /// How many priced trips the day has (0, 1 or 2).
    pub fn trip_count(&self) -> usize {
        usize::from(self.to_work.is_some()) + usize::from(self.from_work.is_some())
    }

    pub fn has_trips(&self) -> bool {
        self.trip_count() > 0
    }
}

/// One commuter's line in a recharge plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RechargeEntry {
    label: String,
    costs: CommuteCosts,
    daily: FareAmount,
    weekly: FareAmount,
    monthly: FareAmount,
}

impl RechargeEntry {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn costs(&self) -> CommuteCosts {
        self.costs
    }

    pub fn daily(&self) -> FareAmount {
        self.daily
    }

    pub fn weekly(&self) -> FareAmount {
        self.weekly
    }

    pub fn monthly(&self) -> FareAmount {
        self.monthly
    }

    /// What this commuter needs for a whole period.
    pub fn cost_for(&self, period: RechargePeriod) -> FareAmount {
        match period {
            RechargePeriod::Days(days) => self.daily * days,
            RechargePeriod::Weeks(weeks) => self.weekly * weeks,
        }
    }
}

/// A recharge plan over a group of commuters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RechargePlan {
    entries: Vec<RechargeEntry>,
    passengers: usize,
    working_days_per_week: u32,
}

impl RechargePlan {
    /// Prices a group of `(label, costs)` commuters.
    ///
    /// Commuters without any priced trip are excluded from the entries
    /// and the totals, but counted towards [`coverage_percent`].
    ///
    /// [`coverage_percent`]: RechargePlan::coverage_percent
    pub fn build(
        commuters: impl IntoIterator<Item = (String, CommuteCosts)>,
        working_days_per_week: u32,
    ) -> Self {
        let mut entries = Vec::new();
        let mut passengers = 0;
        for (label, costs) in commuters {
            passengers += 1;
            if !costs.has_trips() {
                continue;
            }
            let daily = costs.daily();
            let weekly = daily * working_days_per_week;
            let monthly = weekly * WEEKS_PER_MONTH;
            entries.push(RechargeEntry {
                label,
                costs,
                daily,
                weekly,
                monthly,
            });
        }
        RechargePlan {
            entries,
            passengers,
            working_days_per_week,
        }
    }

    /// One entry per commuter with at least one priced trip.
    pub fn entries(&self) -> &[RechargeEntry] {
        &self.entries
    }

    /// How many commuters have a priced route.
    pub fn covered(&self) -> usize {
        self.entries.len()
    }

    /// How many commuters the plan was built over, routed or not.
    pub fn passengers(&self) -> usize {
        self.passengers
    }

    /// Share of commuters with a priced route, in percent.
    pub fn coverage_percent(&self) -> f64 {
        if self.passengers == 0 {
            return 0.0;
        }
        self.covered() as f64 / self.passengers as f64 * 100.0
    }

    pub fn working_days_per_week(&self) -> u32 {
        self.working_days_per_week
    }

    /// What all covered commuters need per working day.
    pub fn daily_total(&self) -> FareAmount {
        self.entries.iter().map(RechargeEntry::daily).sum()
    }

    /// What all covered commuters need per week.
    pub fn weekly_total(&self) -> FareAmount {
        self.entries.iter().map(RechargeEntry::weekly).sum()
    }

    /// What all covered commuters need per month.
    pub fn monthly_total(&self) -> FareAmount {
        self.entries.iter().map(RechargeEntry::monthly).sum()
    }

    /// What the whole group needs for a period.
    pub fn total_for(&self, period: RechargePeriod) -> FareAmount {
        match period {
            RechargePeriod::Days(days) => self.daily_total() * days,
            RechargePeriod::Weeks(weeks) => self.weekly_total() * weeks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn centavos(value: u64) -> FareAmount {
        FareAmount::from_centavos(value)
    }

    fn round_trip(each_way: u64) -> CommuteCosts {
        CommuteCosts {
            to_work: Some(centavos(each_way)),
            from_work: Some(centavos(each_way)),
        }
    }

    #[test]
    fn daily_cost_sums_both_directions() {
        let costs = CommuteCosts {
            to_work: Some(centavos(790)),
            from_work: Some(centavos(575)),
        };
        assert_eq!(costs.daily(), centavos(1365));
        assert_eq!(costs.trip_count(), 2);

        let one_way = CommuteCosts {
            to_work: Some(centavos(790)),
            from_work: None,
        };
        assert_eq!(one_way.daily(), centavos(790));
        assert_eq!(one_way.trip_count(), 1);
    }

    #[test]
    fn weekly_and_monthly_scale_from_the_daily_cost() {
        let plan = RechargePlan::build(
            [("Ana".to_owned(), round_trip(790))],
            DEFAULT_WORKING_DAYS_PER_WEEK,
        );
        let entry = &plan.entries()[0];
        assert_eq!(entry.daily(), centavos(1580));
        assert_eq!(entry.weekly(), centavos(7900));
        assert_eq!(entry.monthly(), centavos(31600));
    }

    #[test]
    fn unrouted_commuters_are_counted_but_not_priced() {
        let plan = RechargePlan::build(
            [
                ("Ana".to_owned(), round_trip(790)),
                ("Bruno".to_owned(), CommuteCosts::default()),
                ("Carla".to_owned(), round_trip(575)),
            ],
            5,
        );
        assert_eq!(plan.covered(), 2);
        assert_eq!(plan.passengers(), 3);
        assert!((plan.coverage_percent() - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(plan.daily_total(), centavos(1580 + 1150));
    }

    #[test]
    fn a_free_route_still_counts_as_coverage() {
        let plan = RechargePlan::build(
            [(
                "Dina".to_owned(),
                CommuteCosts {
                    to_work: Some(FareAmount::ZERO),
                    from_work: None,
                },
            )],
            5,
        );
        assert_eq!(plan.covered(), 1);
        assert_eq!(plan.daily_total(), FareAmount::ZERO);
    }

    #[test]
    fn period_totals_scale_the_daily_and_weekly_sums() {
        let plan = RechargePlan::build(
            [
                ("Ana".to_owned(), round_trip(790)),
                ("Carla".to_owned(), round_trip(575)),
            ],
            5,
        );
        assert_eq!(
            plan.total_for(RechargePeriod::Days(3)),
            plan.daily_total() * 3
        );
        assert_eq!(
            plan.total_for(RechargePeriod::Weeks(2)),
            plan.weekly_total() * 2
        );
        // Period totals agree with summing each entry's own period cost
        let by_entry: FareAmount = plan
            .entries()
            .iter()
            .map(|entry| entry.cost_for(RechargePeriod::Weeks(2)))
            .sum();
        assert_eq!(plan.total_for(RechargePeriod::Weeks(2)), by_entry);
    }

    #[test]
    fn empty_plan_has_zero_coverage() {
        let plan = RechargePlan::build(Vec::new(), 5);
        assert_eq!(plan.passengers(), 0);
        assert_eq!(plan.coverage_percent(), 0.0);
        assert_eq!(plan.daily_total(), FareAmount::ZERO);
    }
}

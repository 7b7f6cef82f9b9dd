//! Validation Test Suite
//!
//! End-to-end scenarios that cross module boundaries: durations feeding
//! rates feeding rounding, and annual rules driven over realistic intervals.

#[cfg(test)]
mod rate_validation {
    use crate::error::CadenceError;
    use crate::types::{Duration, RoundingPolicy, TimeRate, TimeUnit};
    use rust_decimal_macros::dec;

    // =========================================================================
    // Exact rate application
    // =========================================================================

    #[test]
    fn test_rv_001_hourly_rate_over_whole_hours() {
        let rate = TimeRate::new(dec!(1000), Duration::hours(1)).unwrap();
        let amount = rate.over(&Duration::hours(3)).unwrap();
        assert_eq!(amount, dec!(3000));
        assert_eq!(amount.scale(), 0);
    }

    #[test]
    fn test_rv_002_over_matches_ratio_times_quantity() {
        let rate = TimeRate::parse("37.5", Duration::weeks(1)).unwrap();
        let duration = Duration::days(14);

        let ratio = duration.divided_by(&rate.unit()).unwrap();
        let expected = ratio.times_decimal(rate.quantity()).unwrap();
        assert!(expected.is_integer());
        assert_eq!(expected.numerator(), 75);

        let amount = rate.over(&duration).unwrap();
        assert_eq!(amount, dec!(75.0));
        assert_eq!(amount.scale(), 1);
    }

    #[test]
    fn test_rv_003_non_terminating_needs_policy() {
        let rate = TimeRate::new(dec!(10), Duration::hours(3)).unwrap();
        let one_hour = Duration::hours(1);

        assert!(matches!(
            rate.over(&one_hour),
            Err(CadenceError::InexactDivision { scale: 0, .. })
        ));
        assert_eq!(
            rate.over_with(&one_hour, 2, RoundingPolicy::Ceiling).unwrap(),
            dec!(3.34)
        );
        assert_eq!(
            rate.over_with(&one_hour, 2, RoundingPolicy::Floor).unwrap(),
            dec!(3.33)
        );
        assert_eq!(
            rate.over_rounded(&one_hour, RoundingPolicy::HalfEven).unwrap(),
            dec!(3)
        );
    }

    #[test]
    fn test_rv_004_monthly_rate_over_calendar_units() {
        let rent = TimeRate::new(dec!(1200.00), Duration::months(1)).unwrap();
        assert_eq!(rent.over(&Duration::quarters(1)).unwrap(), dec!(3600.00));
        assert_eq!(rent.over(&Duration::years(2)).unwrap(), dec!(28800.00));
        assert!(matches!(
            rent.over(&Duration::days(30)),
            Err(CadenceError::IncompatibleUnit {
                from: TimeUnit::Day,
                to: TimeUnit::Month,
            })
        ));
    }

    #[test]
    fn test_rv_005_per_second_rate_over_milliseconds() {
        let throughput = TimeRate::new(dec!(250), Duration::seconds(1)).unwrap();
        assert_eq!(
            throughput.over(&Duration::milliseconds(1500)).unwrap(),
            dec!(375)
        );
        assert!(throughput
            .over(&Duration::milliseconds(1))
            .unwrap_err()
            .requires_rounding());
        assert_eq!(
            throughput
                .over_with(&Duration::milliseconds(1), 2, RoundingPolicy::Unnecessary)
                .unwrap(),
            dec!(0.25)
        );
    }

    #[test]
    fn test_rv_006_mixed_unit_durations_feed_rates() {
        // 1 hour + 30 minutes, expressed in minutes
        let shift = Duration::hours(1).plus(&Duration::minutes(30)).unwrap();
        assert_eq!(shift, Duration::minutes(90));

        let rate = TimeRate::new(dec!(20), Duration::hours(1)).unwrap();
        assert_eq!(rate.over(&shift).unwrap(), dec!(30));
        assert!(shift.convert_to(TimeUnit::Hour).is_err());
    }
}

#[cfg(test)]
mod rounding_validation {
    use crate::types::{Ratio, RoundingPolicy};
    use rust_decimal_macros::dec;

    // =========================================================================
    // Exact and native rounding agree
    // =========================================================================

    #[test]
    fn test_rd_001_apply_and_round_agree_on_terminating_values() {
        let values = [dec!(2.5), dec!(-2.5), dec!(1.15), dec!(-0.05), dec!(7.125)];
        for policy in RoundingPolicy::ALL {
            if policy == RoundingPolicy::Unnecessary {
                continue;
            }
            for value in values {
                let exact = policy.apply(Ratio::from_decimal(value), 1).unwrap();
                let native = policy.round(value, 1).unwrap();
                assert_eq!(exact, native, "{policy} on {value}");
                assert_eq!(exact.scale(), native.scale(), "{policy} on {value}");
            }
        }
    }

    #[test]
    fn test_rd_002_thirds_at_increasing_scales() {
        let third = Ratio::new(1, 3).unwrap();
        assert_eq!(RoundingPolicy::HalfUp.apply(third, 0).unwrap(), dec!(0));
        assert_eq!(RoundingPolicy::HalfUp.apply(third, 4).unwrap(), dec!(0.3333));
        assert_eq!(RoundingPolicy::Up.apply(third, 4).unwrap(), dec!(0.3334));
        assert_eq!(
            RoundingPolicy::HalfUp.apply(third, 28).unwrap().scale(),
            28
        );
    }
}

#[cfg(test)]
mod recurrence_validation {
    use crate::calendar::{CalendarDate, CalendarInterval, DateRange};
    use crate::recurrence::{AnnualDateSpecification, DateSpecification};
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    // =========================================================================
    // Holiday calendars over multi-year ranges
    // =========================================================================

    #[test]
    fn test_rc_001_thanksgiving_decade() {
        let thanksgiving = AnnualDateSpecification::nth_weekday(11, Weekday::Thu, 4).unwrap();
        let decade = CalendarInterval::years(2020, 10).unwrap();
        let dates: Vec<_> = thanksgiving.iterate_over(&decade).collect();

        assert_eq!(dates.len(), 10);
        assert_eq!(dates[0], date(2020, 11, 26));
        assert_eq!(dates[9], date(2029, 11, 22));
        for pair in dates.windows(2) {
            assert!(pair[0] < pair[1]);
            assert_eq!(pair[1].year(), pair[0].year() + 1);
        }
        for d in &dates {
            assert_eq!(d.weekday(), Weekday::Thu);
            assert!(thanksgiving.is_satisfied_by(d));
            assert!(decade.includes(d));
        }
    }

    #[test]
    fn test_rc_002_range_starting_after_this_years_occurrence() {
        let memorial_day = AnnualDateSpecification::last_weekday(5, Weekday::Mon).unwrap();
        let span = CalendarInterval::new(date(2024, 6, 1), date(2027, 1, 1)).unwrap();
        let dates: Vec<_> = memorial_day.iterate_over(&span).collect();
        assert_eq!(dates, vec![date(2025, 5, 26), date(2026, 5, 25)]);
    }

    #[test]
    fn test_rc_003_range_ending_before_occurrence() {
        let christmas = AnnualDateSpecification::fixed(12, 25).unwrap();
        let span = CalendarInterval::new(date(2025, 1, 1), date(2025, 12, 25)).unwrap();
        assert_eq!(christmas.first_occurrence_on_or_after(&span), None);
        assert_eq!(christmas.iterate_over(&span).count(), 0);
    }

    #[test]
    fn test_rc_004_mixed_rules_as_trait_objects() {
        let rules: Vec<Box<dyn DateSpecification>> = vec![
            Box::new(AnnualDateSpecification::fixed(1, 1).unwrap()),
            Box::new(AnnualDateSpecification::nth_weekday(1, Weekday::Mon, 3).unwrap()),
            Box::new(AnnualDateSpecification::fixed(7, 4).unwrap()),
        ];
        let year = CalendarInterval::years(2025, 1).unwrap();
        let mut holidays: Vec<_> = rules
            .iter()
            .flat_map(|rule| rule.iterate_over(&year))
            .collect();
        holidays.sort();
        assert_eq!(
            holidays,
            vec![date(2025, 1, 1), date(2025, 1, 20), date(2025, 7, 4)]
        );
    }
}

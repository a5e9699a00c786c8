use serde::{Deserialize, Serialize};

use crate::models::{ForecastSnapshot, Stage};

/// Project a base value forward at a compound growth rate.
///
/// `P(n) = base * (1 + rate/100)^n`. Each horizon is computed directly from
/// the base, never chained year over year. Total for all real inputs.
pub fn project_compound(base: f64, rate_percent: f64, years: u32) -> f64 {
    base * (1.0 + rate_percent / 100.0).powi(years as i32)
}

/// The converted-population results of one forecast run, rounded to whole
/// persons.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PopulationForecast {
    /// Base population: latest historical total plus converted visitors
    pub current: f64,
    pub ten_year: f64,
    pub twenty_year: f64,
    pub fifty_year: f64,
}

/// Run the compound-growth projection for a snapshot.
///
/// Reads the already-converged derived fields: the two 5-year averages and
/// the converted short-term population. The same base and combined rate feed
/// all three horizons, so re-running on an unchanged snapshot reproduces
/// identical results.
pub fn population_forecast(snapshot: &ForecastSnapshot) -> PopulationForecast {
    let base = snapshot.base_population();
    let rate = snapshot.combined_growth_rate();
    let [ten_year, twenty_year, fifty_year] =
        Stage::HORIZONS.map(|stage| project_compound(base, rate, stage.years()).round());
    PopulationForecast {
        current: base.round(),
        ten_year,
        twenty_year,
        fifty_year,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn snapshot_with_base(total: f64, converted: f64, natural: f64, mechanical: f64) -> ForecastSnapshot {
        let mut snapshot = ForecastSnapshot::new("Projection Test", 2020);
        if let Some(last) = snapshot.historical_population.last_mut() {
            last.total_population = total;
        }
        snapshot.converted_short_term_population = converted;
        snapshot.natural_growth_rate_5y = natural;
        snapshot.mechanical_growth_rate_5y = mechanical;
        snapshot
    }

    #[test]
    fn test_project_compound_zero_rate() {
        assert_approx_eq!(project_compound(100_000.0, 0.0, 10), 100_000.0);
    }

    #[test]
    fn test_project_compound_zero_years() {
        assert_approx_eq!(project_compound(100_000.0, 2.5, 0), 100_000.0);
    }

    #[test]
    fn test_project_compound_one_year() {
        assert_approx_eq!(project_compound(1_000.0, 2.0, 1), 1_020.0);
    }

    #[test]
    fn test_project_compound_matches_repeated_multiplication() {
        let mut expected = 100_685.0;
        for _ in 0..10 {
            expected *= 1.025;
        }
        assert_approx_eq!(project_compound(100_685.0, 2.5, 10), expected, 1e-6);
    }

    #[test]
    fn test_project_compound_negative_rate_shrinks() {
        let projected = project_compound(10_000.0, -1.0, 10);
        assert!(projected < 10_000.0);
        assert!(projected > 0.0);
    }

    #[test]
    fn test_population_forecast_example() {
        // Base 100_000 + 685, combined rate 1.2 + 1.3 = 2.5%
        let snapshot = snapshot_with_base(100_000.0, 685.0, 1.2, 1.3);
        let forecast = population_forecast(&snapshot);
        assert_eq!(forecast.current, 100_685.0);
        assert_eq!(forecast.ten_year, 128_885.0);
        assert!(forecast.twenty_year > forecast.ten_year);
        assert!(forecast.fifty_year > forecast.twenty_year);
    }

    #[test]
    fn test_population_forecast_horizons_not_chained() {
        let snapshot = snapshot_with_base(50_000.0, 0.0, 1.0, 1.0);
        let forecast = population_forecast(&snapshot);
        // 20-year result comes straight from the base, not from the 10-year value
        assert_eq!(
            forecast.twenty_year,
            project_compound(50_000.0, 2.0, 20).round()
        );
    }

    #[test]
    fn test_population_forecast_zero_rate_keeps_base() {
        let snapshot = snapshot_with_base(42_000.0, 0.0, 0.0, 0.0);
        let forecast = population_forecast(&snapshot);
        assert_eq!(forecast.current, 42_000.0);
        assert_eq!(forecast.ten_year, 42_000.0);
        assert_eq!(forecast.fifty_year, 42_000.0);
    }

    #[test]
    fn test_population_forecast_idempotent() {
        let snapshot = snapshot_with_base(123_456.0, 789.0, 1.1, 0.4);
        let first = population_forecast(&snapshot);
        let second = population_forecast(&snapshot);
        assert_eq!(first, second);
    }

    #[test]
    fn test_population_forecast_results_are_integers() {
        let snapshot = snapshot_with_base(99_999.0, 684.93_f64.round(), 1.23, 0.77);
        let forecast = population_forecast(&snapshot);
        for value in [
            forecast.current,
            forecast.ten_year,
            forecast.twenty_year,
            forecast.fifty_year,
        ] {
            assert_eq!(value, value.round());
        }
    }

    #[test]
    fn test_forecast_json_roundtrip() {
        let forecast = PopulationForecast {
            current: 100_685.0,
            ten_year: 128_885.0,
            twenty_year: 164_998.0,
            fifty_year: 345_000.0,
        };
        let json = serde_json::to_string(&forecast).unwrap();
        let back: PopulationForecast = serde_json::from_str(&json).unwrap();
        assert_eq!(back, forecast);
    }
}

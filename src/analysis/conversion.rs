use super::rates::finite_or_zero;

/// Resident-equivalent population of short-term (under six months) visitors.
///
/// `N0 = (2 * Nt * m) / 365` where `Nt` is the total visitor count over the
/// reference period and `m` the average stay length in days. Zero or
/// non-finite inputs yield 0; the result is unrounded (the reducer rounds it
/// before storing). Monotone non-decreasing in both arguments.
pub fn short_term_equivalent(visitors_total: f64, average_stay_days: f64) -> f64 {
    let nt = finite_or_zero(visitors_total);
    let m = finite_or_zero(average_stay_days);
    if nt == 0.0 || m == 0.0 {
        return 0.0;
    }
    (2.0 * nt * m) / 365.0
}

/// Persons per hectare. A zero area yields 0.
pub fn population_density(population: f64, area_ha: f64) -> f64 {
    if area_ha == 0.0 {
        return 0.0;
    }
    population / area_ha
}

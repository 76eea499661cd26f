//! Domain dispatch
//!
//! Routes a conversion to the right converter, either for an explicit
//! domain or by detecting the domain from the unit names.

use crate::domain::{
    entities::{Conversion, ConversionRequest, LENGTH_TABLE, WEIGHT_TABLE},
    errors::DomainError,
    value_objects::{Domain, TemperatureScale},
};

use super::{convert_length, convert_temperature, convert_weight};

/// Convert `value` within `domain`
pub fn convert(
    domain: Domain,
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> Result<f64, DomainError> {
    let result = match domain {
        Domain::Length => convert_length(value, from_unit, to_unit),
        Domain::Weight => convert_weight(value, from_unit, to_unit),
        Domain::Temperature => convert_temperature(value, from_unit, to_unit),
    };

    match &result {
        Ok(out) => tracing::debug!("{domain}: {value} {from_unit} -> {out} {to_unit}"),
        Err(e) => tracing::debug!("{domain}: conversion rejected: {e}"),
    }

    result
}

/// Domain whose unit set contains `unit`
pub fn detect_domain(unit: &str) -> Option<Domain> {
    if LENGTH_TABLE.contains(unit) {
        Some(Domain::Length)
    } else if WEIGHT_TABLE.contains(unit) {
        Some(Domain::Weight)
    } else if unit.parse::<TemperatureScale>().is_ok() {
        Some(Domain::Temperature)
    } else {
        None
    }
}

/// Convert a request whose domain is inferred from its units.
///
/// Fails with `UnknownUnit` when either unit belongs to no domain, and with
/// `InvalidDomainCombination` when the units come from different domains.
pub fn convert_auto(request: &ConversionRequest) -> Result<Conversion, DomainError> {
    let from = detect_domain(&request.from_unit)
        .ok_or_else(|| DomainError::unresolved_unit(&request.from_unit))?;
    let to = detect_domain(&request.to_unit)
        .ok_or_else(|| DomainError::unresolved_unit(&request.to_unit))?;

    if from != to {
        return Err(DomainError::InvalidDomainCombination { from, to });
    }

    let result = convert(from, request.value, &request.from_unit, &request.to_unit)?;

    Ok(Conversion {
        domain: from,
        value: request.value,
        from_unit: request.from_unit.clone(),
        to_unit: request.to_unit.clone(),
        result,
    })
}

/// Unit names of `domain` in display order
pub fn units(domain: Domain) -> Vec<&'static str> {
    match domain {
        Domain::Length => LENGTH_TABLE.units().collect(),
        Domain::Weight => WEIGHT_TABLE.units().collect(),
        Domain::Temperature => TemperatureScale::ALL.iter().map(|s| s.name()).collect(),
    }
}

/// Base unit of a linear domain; temperature has none
pub fn base_unit(domain: Domain) -> Option<&'static str> {
    match domain {
        Domain::Length => LENGTH_TABLE.base_unit(),
        Domain::Weight => WEIGHT_TABLE.base_unit(),
        Domain::Temperature => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [f64; 5] = [1.0, 42.5, -3.25, 1234.5678, 0.001];

    fn approx_eq(a: f64, b: f64) -> bool {
        let scale = a.abs().max(b.abs()).max(1.0);
        (a - b).abs() <= 1e-9 * scale
    }

    #[test]
    fn test_identity_law() {
        for domain in Domain::ALL {
            for unit in units(domain) {
                for v in SAMPLES.iter().chain(&[0.0, -0.0, 1e300]) {
                    assert_eq!(convert(domain, *v, unit, unit), Ok(*v), "{domain} {unit}");
                }
            }
        }
    }

    #[test]
    fn test_round_trip() {
        for domain in Domain::ALL {
            let names = units(domain);
            for a in &names {
                for b in &names {
                    for v in SAMPLES {
                        let there = convert(domain, v, a, b).unwrap();
                        let back = convert(domain, there, b, a).unwrap();
                        assert!(approx_eq(back, v), "{domain}: {v} {a} -> {b} -> {back}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_transitivity() {
        for domain in Domain::ALL {
            let names = units(domain);
            for a in &names {
                for b in &names {
                    for c in &names {
                        let direct = convert(domain, 7.5, a, c).unwrap();
                        let via = convert(domain, 7.5, a, b).unwrap();
                        let via = convert(domain, via, b, c).unwrap();
                        assert!(approx_eq(direct, via), "{domain}: {a} -> {b} -> {c}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_detect_domain() {
        assert_eq!(detect_domain("light years"), Some(Domain::Length));
        assert_eq!(detect_domain("metric tons"), Some(Domain::Weight));
        assert_eq!(detect_domain("fahrenheit"), Some(Domain::Temperature));
        assert_eq!(detect_domain("Fahrenheit"), None);
        assert_eq!(detect_domain("parsecs"), None);
    }

    #[test]
    fn test_convert_auto() {
        let request = ConversionRequest::new(1.0, "kilometers", "meters");
        let conversion = convert_auto(&request).unwrap();
        assert_eq!(conversion.domain, Domain::Length);
        assert_eq!(conversion.result, 1000.0);

        let request = ConversionRequest::new(100.0, "celsius", "fahrenheit");
        let conversion = convert_auto(&request).unwrap();
        assert_eq!(conversion.domain, Domain::Temperature);
        assert_eq!(conversion.result, 212.0);
    }

    #[test]
    fn test_convert_auto_rejects_mixed_domains() {
        assert_eq!(
            convert_auto(&ConversionRequest::new(1.0, "meters", "kilograms")),
            Err(DomainError::InvalidDomainCombination {
                from: Domain::Length,
                to: Domain::Weight,
            })
        );
    }

    #[test]
    fn test_convert_auto_unknown_unit() {
        assert_eq!(
            convert_auto(&ConversionRequest::new(5.0, "meters", "parsecs")),
            Err(DomainError::unresolved_unit("parsecs"))
        );
    }

    #[test]
    fn test_units_and_base() {
        assert_eq!(units(Domain::Temperature), vec!["celsius", "fahrenheit", "kelvin"]);
        assert_eq!(units(Domain::Length).len(), 11);
        assert_eq!(units(Domain::Weight).len(), 8);
        assert_eq!(base_unit(Domain::Length), Some("meters"));
        assert_eq!(base_unit(Domain::Weight), Some("kilograms"));
        assert_eq!(base_unit(Domain::Temperature), None);
    }
}

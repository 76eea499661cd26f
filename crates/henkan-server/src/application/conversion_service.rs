//! Conversion Application Service (Use Case)
//!
//! Runs conversions through the domain library and renders results.

use henkan::{Conversion, ConversionRequest, Domain, DomainError};

/// Application service for conversions
pub struct ConversionService {
    precision: usize,
}

impl ConversionService {
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }

    /// Convert within an explicit domain
    pub fn convert(
        &self,
        domain: Domain,
        request: ConversionRequest,
    ) -> Result<Conversion, DomainError> {
        let result = henkan::convert(domain, request.value, &request.from_unit, &request.to_unit)
            .inspect_err(|e| tracing::info!("Rejected {} conversion: {}", domain, e))?;

        let conversion = Conversion {
            domain,
            value: request.value,
            from_unit: request.from_unit,
            to_unit: request.to_unit,
            result,
        };

        tracing::info!("Converted {}", self.render(&conversion));
        Ok(conversion)
    }

    /// Convert, detecting the domain from the units
    pub fn convert_auto(&self, request: ConversionRequest) -> Result<Conversion, DomainError> {
        let conversion = henkan::convert_auto(&request)
            .inspect_err(|e| tracing::info!("Rejected conversion: {}", e))?;

        tracing::info!("Converted {} ({})", self.render(&conversion), conversion.domain);
        Ok(conversion)
    }

    /// Human-readable result line
    pub fn render(&self, conversion: &Conversion) -> String {
        conversion.display(self.precision)
    }
}

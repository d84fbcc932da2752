//! Field updates. Each setter touches exactly one field.

use super::{EguiController, FieldError};
use crate::api::{Brand, Criterion, Processor, Requirements};
use crate::egui_app::state::NumericDraft;

impl EguiController {
    /// Store a typed weight; the submitted value only changes when it parses.
    pub fn set_weight_text(
        &mut self,
        criterion: Criterion,
        text: impl Into<String>,
    ) -> Result<(), FieldError> {
        let text = text.into();
        let parsed = parse_weight(criterion.wire_name(), &text);
        record_draft(
            self.ui.weights.drafts.entry(criterion).or_default(),
            text,
            parsed.is_err(),
        );
        let value = parsed?;
        self.ui.weights.values = self.ui.weights.values.with(criterion, value);
        Ok(())
    }

    pub fn set_brand(&mut self, brand: Option<Brand>) {
        self.ui.requirements.values.brand = brand;
    }

    pub fn set_processor(&mut self, processor: Option<Processor>) {
        self.ui.requirements.values.processor = processor;
    }

    pub fn set_ram_text(&mut self, text: impl Into<String>) -> Result<(), FieldError> {
        let text = text.into();
        let parsed = parse_ram(&text);
        record_draft(&mut self.ui.requirements.ram_draft, text, parsed.is_err());
        self.ui.requirements.values.ram = parsed?;
        Ok(())
    }

    pub fn set_has_sacoche(&mut self, has_sacoche: bool) {
        self.ui.requirements.values.has_sacoche = has_sacoche;
    }

    pub fn set_is_available(&mut self, is_available: bool) {
        self.ui.requirements.values.is_available = is_available;
    }

    pub fn set_product_name(&mut self, name: impl Into<String>) {
        self.ui.inference.product_name = name.into();
    }

    /// Store a typed price; clearing the field clears the price.
    pub fn set_price_text(&mut self, text: impl Into<String>) -> Result<(), FieldError> {
        let text = text.into();
        let parsed = parse_price(&text);
        record_draft(&mut self.ui.inference.price_draft, text, parsed.is_err());
        self.ui.inference.price = parsed?;
        Ok(())
    }
}

fn record_draft(draft: &mut NumericDraft, text: String, invalid: bool) {
    draft.text = text;
    draft.invalid = invalid;
}

fn parse_number(field: &'static str, text: &str) -> Result<f64, FieldError> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| FieldError::NotANumber {
            field,
            text: text.to_string(),
        })
}

fn parse_weight(field: &'static str, text: &str) -> Result<f64, FieldError> {
    let value = parse_number(field, text)?;
    if value <= 0.0 {
        return Err(FieldError::NotPositive { field });
    }
    Ok(value)
}

fn parse_ram(text: &str) -> Result<u32, FieldError> {
    let out_of_range = || FieldError::OutOfRange {
        field: "RAM",
        min: Requirements::MIN_RAM,
        max: Requirements::MAX_RAM,
    };
    let value = text.trim().parse::<u32>().map_err(|_| out_of_range())?;
    if !(Requirements::MIN_RAM..=Requirements::MAX_RAM).contains(&value) {
        return Err(out_of_range());
    }
    Ok(value)
}

fn parse_price(text: &str) -> Result<Option<f64>, FieldError> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    let value = parse_number("Price", text)?;
    if value < 0.0 {
        return Err(FieldError::Negative { field: "Price" });
    }
    Ok(Some(value))
}

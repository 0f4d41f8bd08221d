//! Admin forms for email templates and quote sending.

use serde::Deserialize;
use validator::Validate;

use crate::domain::consultation::QuoteOffer;
use crate::domain::email::{NewEmailTemplate, UpdateEmailTemplate};
use crate::forms::FormError;

#[derive(Deserialize, Validate)]
pub struct SaveTemplateForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub subject: String,
    #[validate(length(min = 1))]
    pub body: String,
    #[validate(length(min = 1))]
    pub kind: String,
    #[serde(default)]
    pub is_active: Option<String>,
}

impl SaveTemplateForm {
    fn collect(self) -> Result<NewEmailTemplate, FormError> {
        self.validate()?;
        Ok(NewEmailTemplate {
            name: self.name.trim().to_string(),
            subject: self.subject.trim().to_string(),
            body: self.body,
            kind: self.kind.trim().to_string(),
            is_active: self.is_active.is_some(),
        })
    }

    pub fn into_new_template(self) -> Result<NewEmailTemplate, FormError> {
        self.collect()
    }

    pub fn into_update_template(self) -> Result<UpdateEmailTemplate, FormError> {
        let template = self.collect()?;
        Ok(UpdateEmailTemplate {
            name: template.name,
            subject: template.subject,
            body: template.body,
            kind: template.kind,
            is_active: template.is_active,
        })
    }
}

#[derive(Deserialize, Validate)]
/// Quote figures posted from the consultation detail page.
pub struct SendQuoteForm {
    #[validate(range(min = 0.0))]
    pub amount: f64,
    #[validate(length(min = 1, max = 8))]
    pub currency: String,
    #[validate(range(min = 1, max = 365))]
    pub validity_days: i32,
    pub notes: Option<String>,
}

impl TryFrom<SendQuoteForm> for QuoteOffer {
    type Error = FormError;

    fn try_from(form: SendQuoteForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(QuoteOffer {
            amount: form.amount,
            currency: form.currency.trim().to_uppercase(),
            validity_days: form.validity_days,
            notes: form
                .notes
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_currency_is_uppercased() {
        let form = SendQuoteForm {
            amount: 12_500.0,
            currency: "usd".into(),
            validity_days: 30,
            notes: Some("   ".into()),
        };
        let offer = QuoteOffer::try_from(form).unwrap();
        assert_eq!(offer.currency, "USD");
        assert!(offer.notes.is_none());
    }

    #[test]
    fn negative_amount_is_rejected() {
        let form = SendQuoteForm {
            amount: -1.0,
            currency: "USD".into(),
            validity_days: 30,
            notes: None,
        };
        assert!(QuoteOffer::try_from(form).is_err());
    }
}

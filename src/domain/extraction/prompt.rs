use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::template::PromptTemplate;
use crate::domain::DomainError;

/// Fixed instruction template for tenancy extraction.
///
/// The field enumeration here is advisory prose for the model; the
/// binding contract is the schema constraint attached to the forced
/// function call.
const EXTRACTION_TEMPLATE: &str = "\
Only use the functions you have been provided with.
Extract the following information from the rental agreement:
- Tenant's First Name
- Tenant's Last Name
- Landlord's First Name
- Landlord's Last Name
- Address
- Rent
- Deposit
- Whether or not there is a deposit guarantee in place, also known as a \
'Mietkautionsb\u{fc}rgschaft' in German. This is a third-party guarantee serving \
as a substitute for a traditional security deposit.

Input:

${var:input}";

static PARSED_TEMPLATE: Lazy<PromptTemplate> =
    Lazy::new(|| PromptTemplate::parse(EXTRACTION_TEMPLATE));

/// Render the instruction prompt with the transcript bound to `input`.
/// The transcript is embedded verbatim; no cleanup happens here either.
pub fn render_extraction_prompt(transcript: &str) -> Result<String, DomainError> {
    let mut values = HashMap::new();
    values.insert("input".to_string(), transcript.to_string());

    PARSED_TEMPLATE
        .render(&values)
        .map_err(|e| DomainError::internal(format!("Prompt template error: {}", e)))
}

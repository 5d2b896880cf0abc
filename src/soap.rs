//! SOAP 1.1 envelopes for the VIES `checkVat` operation.
//!
//! Building is a fixed template. Parsing walks the document with a
//! [`quick_xml::Reader`] and matches on local element names, so any namespace
//! prefix the service picks (`soap:`, `env:`, none) is accepted.

use quick_xml::Reader;
use quick_xml::escape::escape;
use quick_xml::events::Event;

use crate::error::ViesError;

const ENVELOPE_OPEN: &str = concat!(
    r#"<s11:Envelope xmlns:s11="http://schemas.xmlsoap.org/soap/envelope/">"#,
    "<s11:Body>",
    r#"<tns1:checkVat xmlns:tns1="urn:ec.europa.eu:taxud:vies:services:checkVat:types">"#,
);
const ENVELOPE_CLOSE: &str = "</tns1:checkVat></s11:Body></s11:Envelope>";

/// Payload of a successful `checkVatResponse`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckVatResponse {
    pub country_code: String,
    pub vat_number: String,
    pub valid: bool,
    pub name: String,
    pub address: String,
}

/// A parsed response envelope: either the success payload or a fault token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Envelope {
    Response(CheckVatResponse),
    Fault(String),
}

/// Build the `checkVat` request body.
///
/// Both values are XML-escaped; plain alphanumeric input is embedded as is.
pub fn build_request(country_code: &str, vat_number: &str) -> String {
    let country_code = escape(country_code);
    let vat_number = escape(vat_number);

    let mut body = String::with_capacity(
        ENVELOPE_OPEN.len() + ENVELOPE_CLOSE.len() + country_code.len() + vat_number.len() + 64,
    );
    body.push_str(ENVELOPE_OPEN);
    body.push_str("<tns1:countryCode>");
    body.push_str(&country_code);
    body.push_str("</tns1:countryCode><tns1:vatNumber>");
    body.push_str(&vat_number);
    body.push_str("</tns1:vatNumber>");
    body.push_str(ENVELOPE_CLOSE);
    body
}

#[derive(Clone, Copy)]
enum Target {
    CountryCode,
    VatNumber,
    Valid,
    Name,
    Address,
    FaultString,
}

/// Where text at `path` belongs, for paths of the form `Envelope/Body/<parent>/<leaf>`.
fn target(path: &[String]) -> Option<Target> {
    let [_, body, parent, leaf] = path else {
        return None;
    };
    match (body.as_str(), parent.as_str(), leaf.as_str()) {
        ("Body", "checkVatResponse", "countryCode") => Some(Target::CountryCode),
        ("Body", "checkVatResponse", "vatNumber") => Some(Target::VatNumber),
        ("Body", "checkVatResponse", "valid") => Some(Target::Valid),
        ("Body", "checkVatResponse", "name") => Some(Target::Name),
        ("Body", "checkVatResponse", "address") => Some(Target::Address),
        ("Body", "Fault", "faultstring") => Some(Target::FaultString),
        _ => None,
    }
}

fn parse_bool(raw: &str) -> Result<bool, ViesError> {
    match raw.trim() {
        "1" | "t" | "T" | "true" | "True" | "TRUE" => Ok(true),
        "0" | "f" | "F" | "false" | "False" | "FALSE" | "" => Ok(false),
        other => Err(ViesError::Parse(format!("invalid boolean in <valid>: {other:?}"))),
    }
}

#[derive(Default)]
struct Parsed {
    response: CheckVatResponse,
    valid: String,
    fault: String,
}

impl Parsed {
    fn handle_text(&mut self, path: &[String], text: &str) {
        let Some(target) = target(path) else {
            return;
        };
        let field = match target {
            Target::CountryCode => &mut self.response.country_code,
            Target::VatNumber => &mut self.response.vat_number,
            Target::Valid => &mut self.valid,
            Target::Name => &mut self.response.name,
            Target::Address => &mut self.response.address,
            Target::FaultString => &mut self.fault,
        };
        field.push_str(text);
    }

    fn finish(self) -> Result<Envelope, ViesError> {
        if !self.fault.is_empty() {
            return Ok(Envelope::Fault(self.fault));
        }
        let mut response = self.response;
        response.valid = parse_bool(&self.valid)?;
        Ok(Envelope::Response(response))
    }
}

/// Parse a VIES response document.
///
/// A non-empty `faultstring` yields [`Envelope::Fault`], even if it is only
/// whitespace. A well-formed envelope without either payload yields an empty
/// [`CheckVatResponse`]. Text is taken verbatim; only `<valid>` is trimmed.
///
/// # Errors
///
/// Returns [`ViesError::Parse`] when the document is not well-formed XML
/// or `<valid>` is not a boolean.
pub fn parse_envelope(xml: &str) -> Result<Envelope, ViesError> {
    let mut reader = Reader::from_str(xml);

    let mut parsed = Parsed::default();
    let mut path: Vec<String> = Vec::new();
    let mut saw_root = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                path.push(name);
                saw_root = true;
            }
            Ok(Event::Empty(_)) => {
                saw_root = true;
            }
            Ok(Event::Text(ref e)) => {
                let text = e
                    .unescape()
                    .map_err(|e| ViesError::Parse(e.to_string()))?;
                if !text.is_empty() {
                    parsed.handle_text(&path, &text);
                }
            }
            Ok(Event::CData(ref e)) => {
                let text = String::from_utf8_lossy(e);
                parsed.handle_text(&path, &text);
            }
            Ok(Event::End(_)) => {
                path.pop();
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(ViesError::Parse(format!(
                    "at position {}: {e}",
                    reader.buffer_position()
                )));
            }
        }
    }

    if !saw_root {
        return Err(ViesError::Parse("no root element".into()));
    }
    if let Some(open) = path.last() {
        return Err(ViesError::Parse(format!(
            "unexpected end of document inside <{open}>"
        )));
    }

    parsed.finish()
}

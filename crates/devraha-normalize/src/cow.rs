//! Cow normalization: arbitrary backend JSON to the canonical [`Cow`].

use devraha_types::{Cow, CowListResponse, ExtendedPaginationMeta, PaginationMeta};
use serde_json::Value;

use crate::coerce::to_number_or_zero;
use crate::error::NormalizeError;
use crate::fields::Fields;
use crate::report::{NormalizationReport, Normalized};

/// Normalizes one raw cow record. Total: any input yields a complete [`Cow`].
pub fn normalize_cow(raw: &Value) -> Cow {
    normalize_cow_with_report(raw).value
}

/// Normalizes one raw cow record and reports every field that needed fixing.
pub fn normalize_cow_with_report(raw: &Value) -> Normalized<Cow> {
    let mut report = NormalizationReport::default();
    let value = read_cow(&mut Fields::new(raw, &mut report));
    tracing::trace!(id = %value.id, status = ?report.status, "normalized cow");
    Normalized { value, report }
}

/// Parses JSON text and normalizes it as a cow.
pub fn normalize_cow_json(text: &str) -> Result<Cow, NormalizeError> {
    let raw: Value = serde_json::from_str(text)?;
    Ok(normalize_cow(&raw))
}

/// Normalizes a bare array of cows or a `{ "data": [...] }` list envelope.
///
/// Anything else yields an empty list.
pub fn normalize_cows(raw: &Value) -> Vec<Cow> {
    match list_items(raw) {
        Some(items) => items.iter().map(normalize_cow).collect(),
        None => {
            tracing::debug!("cow list payload has no array; returning empty list");
            Vec::new()
        }
    }
}

/// Normalizes a cow list response, reading pagination numbers leniently.
///
/// Missing or unusable pagination numbers become `0`.
pub fn normalize_cow_list(raw: &Value) -> CowListResponse<Cow> {
    let meta = raw.get("meta");
    let count = |key: &str| -> u64 {
        let number = to_number_or_zero(meta.and_then(|meta| meta.get(key)));
        if number > 0.0 {
            number.trunc() as u64
        } else {
            0
        }
    };

    CowListResponse {
        data: normalize_cows(raw),
        meta: ExtendedPaginationMeta {
            pagination: PaginationMeta {
                page: count("page"),
                limit: count("limit"),
                total: count("total"),
                total_pages: count("totalPages"),
            },
            grand_total: count("grandTotal"),
        },
    }
}

fn list_items(raw: &Value) -> Option<&Vec<Value>> {
    match raw {
        Value::Array(items) => Some(items),
        Value::Object(envelope) => envelope.get("data").and_then(Value::as_array),
        _ => None,
    }
}

fn read_cow(fields: &mut Fields<'_>) -> Cow {
    Cow {
        id: fields.string("_id"),
        cow_id: fields.integer("cowId"),
        name: fields.string("name"),
        photos: fields.strings("photos"),
        description: fields.string("description"),
        calf: fields.flag("calf"),
        gender: fields.gender("gender"),
        adoption_status: fields.flag("adoptionStatus"),
        sponsor_name: fields.text("sponsorName"),
        sponsor_id: fields.text("sponsorId"),
        total_donated: fields.number("totalDonated"),
        donators: fields.values("donators"),
        eartag: fields.text("eartag"),
        special_care: fields.flag("specialCare"),
        testimonials: fields.flag("testimonials"),
        youtube_url: fields.text("youtubeUrl"),
        created_at: fields.text("createdAt"),
        updated_at: fields.text("updatedAt"),
    }
}

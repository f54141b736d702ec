//! Derivation of every spelling a currency may appear as.

use super::amounts_model::{Placement, Spacing, SurfaceForm, SurfaceKind};
use crate::currencies::CurrencyRecord;

/// Builds the surface forms of `currency` in precedence order.
///
/// Empty spellings are skipped, and a spelling already produced by an
/// earlier rule keeps that earlier rule.
pub fn surface_forms(currency: &CurrencyRecord) -> Vec<SurfaceForm> {
    let symbol_spacing = if currency.symbol.chars().count() > 1 {
        Spacing::Optional
    } else {
        Spacing::Required
    };

    let candidates = [
        (
            currency.code.trim().to_string(),
            Placement::Both,
            Spacing::Optional,
            SurfaceKind::IsoCode,
        ),
        (
            currency.symbol.trim().to_string(),
            Placement::Both,
            symbol_spacing,
            SurfaceKind::Symbol,
        ),
        (
            currency.symbol_native.trim().to_string(),
            Placement::Both,
            Spacing::Forbidden,
            SurfaceKind::NativeSymbol,
        ),
        (
            currency.name.trim().to_uppercase(),
            Placement::After,
            Spacing::Optional,
            SurfaceKind::FullName,
        ),
        (
            currency.bare_name().to_uppercase(),
            Placement::After,
            Spacing::Required,
            SurfaceKind::Name,
        ),
        (
            currency.bare_plural_name().to_uppercase(),
            Placement::After,
            Spacing::Required,
            SurfaceKind::PluralName,
        ),
    ];

    let mut forms: Vec<SurfaceForm> = Vec::with_capacity(candidates.len());
    for (text, placement, spacing, kind) in candidates {
        if text.is_empty() || forms.iter().any(|f| f.text == text) {
            continue;
        }
        forms.push(SurfaceForm {
            text,
            placement,
            spacing,
            kind,
        });
    }
    forms
}

/// The form of `kind` among `forms`, if it survived de-duplication.
pub fn form_of_kind(forms: &[SurfaceForm], kind: SurfaceKind) -> Option<&SurfaceForm> {
    forms.iter().find(|f| f.kind == kind)
}

//! Local identifiers for script drafts.

/// Client-side id and ISO-8601 creation time for a new draft.
///
/// The id is the current epoch time in milliseconds, unique enough for the
/// single draft a dashboard holds at once.
pub fn draft_stamp() -> (u64, String) {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let id = now.get_time() as u64;
        (id, String::from(now.to_iso_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        (0, String::new())
    }
}

#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

/// Carried-over product decision: a submission whose delivery could not be
/// confirmed still shows the thank-you panel, so the visitor is never left
/// stranded. Set to false to surface a retry affordance instead.
pub fn mask_unconfirmed_submission() -> bool {
    true
}

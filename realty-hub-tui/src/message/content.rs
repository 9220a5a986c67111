//! Content panel messages
//!
//! Actions inside the page: list selection, copy, the listing form.

#[derive(Debug, Clone)]
pub enum ContentMessage {
    // ========== List navigation ==========
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,

    // ========== Copy ==========
    /// Copy the highlighted template or the generated listing
    Copy,

    // ========== Listing form ==========
    /// Run the listing generator
    Generate,
    NextField,
    PrevField,
    Input(char),
    Backspace,
}

//! Body scroll lock used while the mobile sidebar overlay is open.

#[cfg(test)]
#[path = "scroll_lock_test.rs"]
mod scroll_lock_test;

/// Inline `overflow` value for the `<body>` element, `None` meaning unset.
pub fn body_overflow(locked: bool) -> Option<&'static str> {
    locked.then_some("hidden")
}

/// Lock or release page scrolling. Requires a browser environment.
pub fn set_locked(locked: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.body())
        else {
            return;
        };
        let style = body.style();
        let _ = match body_overflow(locked) {
            Some(value) => style.set_property("overflow", value),
            None => style.remove_property("overflow").map(|_| ()),
        };
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locked;
    }
}

/// Release the lock regardless of current state.
pub fn release() {
    set_locked(false);
}

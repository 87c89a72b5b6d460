// DOM hooks shared by the exported handles.
//
// The page markup is expected to provide these ids, attributes and classes;
// the background and section tracker degrade to no-ops when they are absent.

// Canvas the background draws into when mounted by id
pub const DEFAULT_CANVAS_ID: &str = "wave-background";

// Section tracking
pub const ACTIVE_SECTION_ATTR: &str = "data-active-section"; // set on <html>
pub const REVEAL_SELECTOR: &str = "[data-reveal]";
pub const REVEAL_KEY_ATTR: &str = "data-reveal";
pub const REVEALED_CLASS: &str = "revealed";

// Window events the section tracker listens to
pub const SCROLL_EVENT: &str = "scroll";
pub const RESIZE_EVENT: &str = "resize";

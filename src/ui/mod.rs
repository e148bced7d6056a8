/// UI construction module
///
/// Builds the window content: the form column on the left and the
/// original/optimized preview panel on the right (form.rs).

pub mod form;

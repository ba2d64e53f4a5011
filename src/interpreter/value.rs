/// Runtime value representation.
///
/// Defines the `Value` type produced by evaluation, along with numeric
/// promotion between integers and reals and the textual rendering used when a
/// result is printed.
pub mod core;


/// Config values suitable for tests: loopback addresses, short timeouts.
pub trait TestDefault {
    fn test_default() -> Self;
}

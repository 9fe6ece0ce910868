/// Best-effort reachability check for the companion host
///
/// When the controller is constructed with a probe and a host address, a
/// cycle runs only while the host is reachable. The check is advisory: a
/// false negative merely skips one cycle.
pub trait HostProbe {
    fn is_up(&self, address: &str) -> bool;
}

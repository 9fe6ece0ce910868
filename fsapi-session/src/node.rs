/// The FSAPI nodes the keep-alive path touches
///
/// Node paths follow the device's `netRemote` namespace. Reads return a
/// typed payload (`<u8>` or `<u32>`); writes take a `value=` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Node {
    /// Power state (0 = standby, 1 = on)
    SysPower,

    /// Input mode (0 = network/wireless streaming, 1 = Bluetooth/Aux)
    SysMode,

    /// Playback status (0 = stopped/idle, 1 = playing, 2 = paused)
    PlayStatus,

    /// Playback control; writing 2 requests a pause
    PlayControl,

    /// Track length in milliseconds; 0 means no addressable media
    PlayInfoDuration,
}

impl Node {
    /// Get the dotted node path used on the wire
    pub fn name(&self) -> &'static str {
        match self {
            Node::SysPower => "netRemote.sys.power",
            Node::SysMode => "netRemote.sys.mode",
            Node::PlayStatus => "netRemote.play.status",
            Node::PlayControl => "netRemote.play.control",
            Node::PlayInfoDuration => "netRemote.play.info.duration",
        }
    }
}

/// The two pre-defined FSAPI operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Set,
}

impl Method {
    /// Get the URL path segment for this operation
    pub fn segment(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Set => "SET",
        }
    }
}

use super::{Registry, RegistryEntry, e};

// SYN_ACK, FIN_ACK and RST_ACK are flags of their own, set by the agent when
// both bits were seen on the same packet. They are not unions of the
// primitive bits above them.
const ENTRIES: [RegistryEntry; 11] = [
    e(1, "FIN", "No more data from sender"),
    e(2, "SYN", "Synchronize sequence numbers"),
    e(4, "RST", "Reset the connection"),
    e(8, "PSH", "Push function"),
    e(16, "ACK", "Acknowledgement field is significant"),
    e(32, "URG", "Urgent pointer field is significant"),
    e(64, "ECE", "ECN-Echo"),
    e(128, "CWR", "Congestion window reduced"),
    e(256, "SYN_ACK", "Synchronize and acknowledge"),
    e(512, "FIN_ACK", "Finish and acknowledge"),
    e(1024, "RST_ACK", "Reset and acknowledge"),
];

pub static TCP_FLAGS: Registry = Registry {
    name: "TCP flags",
    entries: &ENTRIES,
};

/// Every flag whose bit is set in `bitfield`, in table order
pub fn decompose_tcp_flags_bitfield(bitfield: u32) -> Vec<&'static RegistryEntry> {
    TCP_FLAGS
        .entries
        .iter()
        .filter(|flag| bitfield & flag.value != 0)
        .collect()
}

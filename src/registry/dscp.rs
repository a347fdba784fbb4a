use super::{Registry, RegistryEntry, e};

const ENTRIES: [RegistryEntry; 22] = [
    e(0, "Standard", "Best effort"),
    e(8, "CS1", "Low-priority data"),
    e(10, "AF11", "High-throughput data, low drop"),
    e(12, "AF12", "High-throughput data, medium drop"),
    e(14, "AF13", "High-throughput data, high drop"),
    e(16, "CS2", "OAM"),
    e(18, "AF21", "Low-latency data, low drop"),
    e(20, "AF22", "Low-latency data, medium drop"),
    e(22, "AF23", "Low-latency data, high drop"),
    e(24, "CS3", "Broadcast video"),
    e(26, "AF31", "Multimedia streaming, low drop"),
    e(28, "AF32", "Multimedia streaming, medium drop"),
    e(30, "AF33", "Multimedia streaming, high drop"),
    e(32, "CS4", "Real-time interactive"),
    e(34, "AF41", "Multimedia conferencing, low drop"),
    e(36, "AF42", "Multimedia conferencing, medium drop"),
    e(38, "AF43", "Multimedia conferencing, high drop"),
    e(40, "CS5", "Signaling"),
    e(44, "VA", "Voice admit"),
    e(46, "EF", "Telephony"),
    e(48, "CS6", "Network control"),
    e(56, "CS7", "Reserved"),
];

pub static DSCP: Registry = Registry {
    name: "DSCP",
    entries: &ENTRIES,
};

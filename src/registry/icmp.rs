use super::{Registry, RegistryEntry, e};

pub const ICMP_PROTOCOL: u32 = 1;
pub const ICMPV6_PROTOCOL: u32 = 58;

const V4_TYPES: [RegistryEntry; 12] = [
    e(0, "EchoReply", "Echo reply"),
    e(3, "DestinationUnreachable", "Destination unreachable"),
    e(5, "Redirect", "Redirect message"),
    e(8, "EchoRequest", "Echo request"),
    e(9, "RouterAdvertisement", "Router advertisement"),
    e(10, "RouterSolicitation", "Router solicitation"),
    e(11, "TimeExceeded", "Time exceeded"),
    e(12, "ParameterProblem", "Parameter problem: bad IP header"),
    e(13, "Timestamp", "Timestamp"),
    e(14, "TimestampReply", "Timestamp reply"),
    e(42, "ExtendedEchoRequest", "Extended echo request"),
    e(43, "ExtendedEchoReply", "Extended echo reply"),
];

const V4_UNREACHABLE_CODES: [RegistryEntry; 16] = [
    e(0, "NetUnreachable", "Destination network unreachable"),
    e(1, "HostUnreachable", "Destination host unreachable"),
    e(2, "ProtocolUnreachable", "Destination protocol unreachable"),
    e(3, "PortUnreachable", "Destination port unreachable"),
    e(4, "FragmentationNeeded", "Fragmentation required, and DF flag set"),
    e(5, "SourceRouteFailed", "Source route failed"),
    e(6, "NetUnknown", "Destination network unknown"),
    e(7, "HostUnknown", "Destination host unknown"),
    e(8, "SourceHostIsolated", "Source host isolated"),
    e(9, "NetProhibited", "Network administratively prohibited"),
    e(10, "HostProhibited", "Host administratively prohibited"),
    e(11, "NetUnreachableForTOS", "Network unreachable for ToS"),
    e(12, "HostUnreachableForTOS", "Host unreachable for ToS"),
    e(13, "CommunicationProhibited", "Communication administratively prohibited"),
    e(14, "HostPrecedenceViolation", "Host precedence violation"),
    e(15, "PrecedenceCutoff", "Precedence cutoff in effect"),
];

const V4_REDIRECT_CODES: [RegistryEntry; 4] = [
    e(0, "RedirectNetwork", "Redirect datagram for the network"),
    e(1, "RedirectHost", "Redirect datagram for the host"),
    e(2, "RedirectTOSNetwork", "Redirect datagram for the ToS and network"),
    e(3, "RedirectTOSHost", "Redirect datagram for the ToS and host"),
];

const V4_TIME_EXCEEDED_CODES: [RegistryEntry; 2] = [
    e(0, "TTLExceeded", "TTL expired in transit"),
    e(1, "FragmentReassemblyTimeExceeded", "Fragment reassembly time exceeded"),
];

const V4_PARAMETER_PROBLEM_CODES: [RegistryEntry; 3] = [
    e(0, "PointerIndicatesError", "Pointer indicates the error"),
    e(1, "MissingRequiredOption", "Missing a required option"),
    e(2, "BadLength", "Bad length"),
];

const V6_TYPES: [RegistryEntry; 12] = [
    e(1, "DestinationUnreachable", "Destination unreachable"),
    e(2, "PacketTooBig", "Packet too big"),
    e(3, "TimeExceeded", "Time exceeded"),
    e(4, "ParameterProblem", "Parameter problem"),
    e(128, "EchoRequest", "Echo request"),
    e(129, "EchoReply", "Echo reply"),
    e(130, "MulticastListenerQuery", "Multicast listener query"),
    e(133, "RouterSolicitation", "Router solicitation"),
    e(134, "RouterAdvertisement", "Router advertisement"),
    e(135, "NeighborSolicitation", "Neighbor solicitation"),
    e(136, "NeighborAdvertisement", "Neighbor advertisement"),
    e(137, "RedirectMessage", "Redirect message"),
];

const V6_UNREACHABLE_CODES: [RegistryEntry; 7] = [
    e(0, "NoRouteToDestination", "No route to destination"),
    e(1, "CommunicationProhibited", "Communication administratively prohibited"),
    e(2, "BeyondScope", "Beyond scope of source address"),
    e(3, "AddressUnreachable", "Address unreachable"),
    e(4, "PortUnreachable", "Port unreachable"),
    e(5, "SourceAddressFailedPolicy", "Source address failed ingress/egress policy"),
    e(6, "RejectRoute", "Reject route to destination"),
];

const V6_TIME_EXCEEDED_CODES: [RegistryEntry; 2] = [
    e(0, "HopLimitExceeded", "Hop limit exceeded in transit"),
    e(1, "FragmentReassemblyTimeExceeded", "Fragment reassembly time exceeded"),
];

const V6_PARAMETER_PROBLEM_CODES: [RegistryEntry; 3] = [
    e(0, "ErroneousHeaderField", "Erroneous header field encountered"),
    e(1, "UnrecognizedNextHeader", "Unrecognized next header type encountered"),
    e(2, "UnrecognizedIPv6Option", "Unrecognized IPv6 option encountered"),
];

pub static ICMP_TYPES: Registry = Registry {
    name: "ICMP types",
    entries: &V4_TYPES,
};

pub static ICMPV6_TYPES: Registry = Registry {
    name: "ICMPv6 types",
    entries: &V6_TYPES,
};

static V4_UNREACHABLE: Registry = Registry {
    name: "ICMP destination unreachable codes",
    entries: &V4_UNREACHABLE_CODES,
};
static V4_REDIRECT: Registry = Registry {
    name: "ICMP redirect codes",
    entries: &V4_REDIRECT_CODES,
};
static V4_TIME_EXCEEDED: Registry = Registry {
    name: "ICMP time exceeded codes",
    entries: &V4_TIME_EXCEEDED_CODES,
};
static V4_PARAMETER_PROBLEM: Registry = Registry {
    name: "ICMP parameter problem codes",
    entries: &V4_PARAMETER_PROBLEM_CODES,
};
static V6_UNREACHABLE: Registry = Registry {
    name: "ICMPv6 destination unreachable codes",
    entries: &V6_UNREACHABLE_CODES,
};
static V6_TIME_EXCEEDED: Registry = Registry {
    name: "ICMPv6 time exceeded codes",
    entries: &V6_TIME_EXCEEDED_CODES,
};
static V6_PARAMETER_PROBLEM: Registry = Registry {
    name: "ICMPv6 parameter problem codes",
    entries: &V6_PARAMETER_PROBLEM_CODES,
};

pub fn icmp_types_for_protocol(protocol: u32) -> Option<&'static Registry> {
    match protocol {
        ICMP_PROTOCOL => Some(&ICMP_TYPES),
        ICMPV6_PROTOCOL => Some(&ICMPV6_TYPES),
        _ => None,
    }
}

/// Code table for an ICMP type, keyed by protocol then type
pub fn icmp_codes(protocol: u32, icmp_type: u32) -> Option<&'static Registry> {
    match (protocol, icmp_type) {
        (ICMP_PROTOCOL, 3) => Some(&V4_UNREACHABLE),
        (ICMP_PROTOCOL, 5) => Some(&V4_REDIRECT),
        (ICMP_PROTOCOL, 11) => Some(&V4_TIME_EXCEEDED),
        (ICMP_PROTOCOL, 12) => Some(&V4_PARAMETER_PROBLEM),
        (ICMPV6_PROTOCOL, 1) => Some(&V6_UNREACHABLE),
        (ICMPV6_PROTOCOL, 3) => Some(&V6_TIME_EXCEEDED),
        (ICMPV6_PROTOCOL, 4) => Some(&V6_PARAMETER_PROBLEM),
        _ => None,
    }
}

/// All code tables, ICMPv4 first
pub(crate) fn all_code_tables() -> [&'static Registry; 7] {
    [
        &V4_UNREACHABLE,
        &V4_REDIRECT,
        &V4_TIME_EXCEEDED,
        &V4_PARAMETER_PROBLEM,
        &V6_UNREACHABLE,
        &V6_TIME_EXCEEDED,
        &V6_PARAMETER_PROBLEM,
    ]
}

use super::{Registry, RegistryEntry, e};

const PROTOCOL_ENTRIES: [RegistryEntry; 10] = [
    e(1, "ICMP", "Internet Control Message Protocol"),
    e(2, "IGMP", "Internet Group Management Protocol"),
    e(6, "TCP", "Transmission Control Protocol"),
    e(17, "UDP", "User Datagram Protocol"),
    e(41, "IPv6", "IPv6 encapsulation"),
    e(47, "GRE", "Generic Routing Encapsulation"),
    e(50, "ESP", "Encapsulating Security Payload"),
    e(51, "AH", "Authentication Header"),
    e(58, "ICMPv6", "Control messages for IPv6"),
    e(132, "SCTP", "Stream Control Transmission Protocol"),
];

const DIRECTION_ENTRIES: [RegistryEntry; 3] = [
    e(0, "Ingress", "Incoming traffic, from the node observation point"),
    e(1, "Egress", "Outgoing traffic, from the node observation point"),
    e(2, "Inner", "Traffic internal to the node"),
];

const PORT_ENTRIES: [RegistryEntry; 20] = [
    e(20, "ftp-data", "File Transfer Protocol data"),
    e(21, "ftp", "File Transfer Protocol control"),
    e(22, "ssh", "Secure Shell"),
    e(23, "telnet", "Telnet"),
    e(25, "smtp", "Simple Mail Transfer Protocol"),
    e(53, "dns", "Domain Name System"),
    e(67, "dhcp", "Dynamic Host Configuration Protocol"),
    e(80, "http", "Hypertext Transfer Protocol"),
    e(110, "pop3", "Post Office Protocol"),
    e(123, "ntp", "Network Time Protocol"),
    e(143, "imap", "Internet Message Access Protocol"),
    e(161, "snmp", "Simple Network Management Protocol"),
    e(179, "bgp", "Border Gateway Protocol"),
    e(389, "ldap", "Lightweight Directory Access Protocol"),
    e(443, "https", "HTTP over TLS"),
    e(2379, "etcd", "etcd client"),
    e(3306, "mysql", "MySQL"),
    e(5432, "postgresql", "PostgreSQL"),
    e(6443, "kube-apiserver", "Kubernetes API server"),
    e(9090, "prometheus", "Prometheus"),
];

const DNS_RCODE_ENTRIES: [RegistryEntry; 12] = [
    e(0, "NoError", "No error"),
    e(1, "FormErr", "Format error"),
    e(2, "ServFail", "Server failure"),
    e(3, "NXDomain", "Non-existent domain"),
    e(4, "NotImp", "Not implemented"),
    e(5, "Refused", "Query refused"),
    e(6, "YXDomain", "Name exists when it should not"),
    e(7, "YXRRSet", "RR set exists when it should not"),
    e(8, "NXRRSet", "RR set that should exist does not"),
    e(9, "NotAuth", "Server not authoritative for zone"),
    e(10, "NotZone", "Name not contained in zone"),
    e(16, "BADVERS", "Bad OPT version"),
];

pub static PROTOCOLS: Registry = Registry {
    name: "Protocols",
    entries: &PROTOCOL_ENTRIES,
};

pub static DIRECTIONS: Registry = Registry {
    name: "Directions",
    entries: &DIRECTION_ENTRIES,
};

pub static PORTS: Registry = Registry {
    name: "Ports",
    entries: &PORT_ENTRIES,
};

pub static DNS_RCODES: Registry = Registry {
    name: "DNS response codes",
    entries: &DNS_RCODE_ENTRIES,
};

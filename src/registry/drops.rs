use super::{Registry, RegistryEntry, e};

const STATES: [RegistryEntry; 13] = [
    e(0, "TCP_INVALID_STATE", "Invalid TCP state"),
    e(1, "TCP_ESTABLISHED", "Connection established"),
    e(2, "TCP_SYN_SENT", "SYN sent, waiting for a matching request"),
    e(3, "TCP_SYN_RECV", "SYN received, waiting for acknowledgement"),
    e(4, "TCP_FIN_WAIT1", "Waiting for termination request or acknowledgement"),
    e(5, "TCP_FIN_WAIT2", "Waiting for termination request from remote"),
    e(6, "TCP_TIME_WAIT", "Waiting for remote to receive termination acknowledgement"),
    e(7, "TCP_CLOSE", "Connection closed"),
    e(8, "TCP_CLOSE_WAIT", "Waiting for termination request from local user"),
    e(9, "TCP_LAST_ACK", "Waiting for acknowledgement of termination request"),
    e(10, "TCP_LISTEN", "Listening for connection requests"),
    e(11, "TCP_CLOSING", "Waiting for termination acknowledgement from remote"),
    e(12, "TCP_NEW_SYN_RECV", "New SYN received"),
];

const CAUSES: [RegistryEntry; 30] = [
    e(2, "SKB_DROP_REASON_NOT_SPECIFIED", "Drop reason is not specified"),
    e(3, "SKB_DROP_REASON_NO_SOCKET", "Socket not found"),
    e(4, "SKB_DROP_REASON_PKT_TOO_SMALL", "Packet size is too small"),
    e(5, "SKB_DROP_REASON_TCP_CSUM", "TCP checksum error"),
    e(6, "SKB_DROP_REASON_SOCKET_FILTER", "Dropped by socket filter"),
    e(7, "SKB_DROP_REASON_UDP_CSUM", "UDP checksum error"),
    e(8, "SKB_DROP_REASON_NETFILTER_DROP", "Dropped by netfilter"),
    e(9, "SKB_DROP_REASON_OTHERHOST", "Packet does not belong to current host"),
    e(10, "SKB_DROP_REASON_IP_CSUM", "IP checksum error"),
    e(11, "SKB_DROP_REASON_IP_INHDR", "Problem with IP header"),
    e(12, "SKB_DROP_REASON_IP_RPFILTER", "IP rpfilter validate failed"),
    e(13, "SKB_DROP_REASON_UNICAST_IN_L2_MULTICAST", "Unicast packet in L2 multicast"),
    e(14, "SKB_DROP_REASON_XFRM_POLICY", "Xfrm policy check failed"),
    e(15, "SKB_DROP_REASON_IP_NOPROTO", "No support for IP protocol"),
    e(16, "SKB_DROP_REASON_SOCKET_RCVBUFF", "Socket receive buffer is full"),
    e(17, "SKB_DROP_REASON_PROTO_MEM", "Protocol memory limit reached"),
    e(18, "SKB_DROP_REASON_TCP_MD5NOTFOUND", "MD5 hash expected but not found"),
    e(19, "SKB_DROP_REASON_TCP_MD5UNEXPECTED", "MD5 hash found but not expected"),
    e(20, "SKB_DROP_REASON_TCP_MD5FAILURE", "MD5 hash mismatch"),
    e(21, "SKB_DROP_REASON_SOCKET_BACKLOG", "Socket backlog is full"),
    e(22, "SKB_DROP_REASON_TCP_FLAGS", "TCP flags invalid"),
    e(23, "SKB_DROP_REASON_TCP_ZEROWINDOW", "TCP receive window size is zero"),
    e(24, "SKB_DROP_REASON_TCP_OLD_DATA", "TCP data already received"),
    e(25, "SKB_DROP_REASON_TCP_OVERWINDOW", "TCP data exceeds receive window"),
    e(26, "SKB_DROP_REASON_TCP_OFOMERGE", "TCP data merged into out-of-order queue"),
    e(27, "SKB_DROP_REASON_TCP_RFC7323_PAWS", "PAWS check failed"),
    e(28, "SKB_DROP_REASON_TCP_INVALID_SEQUENCE", "Invalid TCP sequence number"),
    e(29, "SKB_DROP_REASON_TCP_RESET", "Invalid RST packet"),
    e(30, "SKB_DROP_REASON_TCP_INVALID_SYN", "Incoming packet has unexpected SYN flag"),
    e(31, "SKB_DROP_REASON_TCP_CLOSE", "TCP socket in CLOSE state"),
];

pub static DROP_STATES: Registry = Registry {
    name: "Drop states",
    entries: &STATES,
};

pub static DROP_CAUSES: Registry = Registry {
    name: "Drop causes",
    entries: &CAUSES,
};

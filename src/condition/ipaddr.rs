use {
    crate::serutil::StringList,
    ipnet::IpNet,
    std::net::IpAddr,
};

/// IP address operation names.
pub(super) const IP_ADDRESS_DISPLAY_NAMES: [&str; 4] =
    ["IpAddress", "IpAddressIfExists", "NotIpAddress", "NotIpAddressIfExists"];

impl From<IpNet> for StringList {
    fn from(value: IpNet) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<IpAddr> for StringList {
    fn from(value: IpAddr) -> Self {
        Self::Single(IpNet::from(value).to_string())
    }
}

impl From<Vec<IpNet>> for StringList {
    fn from(value: Vec<IpNet>) -> Self {
        Self::from_iter_display(value)
    }
}

#[cfg(test)]
mod tests {
    use {
        crate::serutil::StringList,
        ipnet::IpNet,
        pretty_assertions::assert_eq,
        std::{net::IpAddr, str::FromStr},
    };

    #[test_log::test]
    fn test_from_ip() {
        let net = IpNet::from_str("203.0.113.0/24").unwrap();
        assert_eq!(StringList::from(net), StringList::from("203.0.113.0/24"));

        let addr = IpAddr::from_str("192.0.2.1").unwrap();
        assert_eq!(StringList::from(addr), StringList::from("192.0.2.1/32"));

        let nets = vec![net, IpNet::from_str("2001:db8::/32").unwrap()];
        assert_eq!(StringList::from(nets), StringList::from(["203.0.113.0/24", "2001:db8::/32"]));
    }
}

use super::*;

fn lookup(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    move |key| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| (*v).to_owned())
}

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.site_root, PathBuf::from(DEFAULT_SITE_ROOT));
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn reads_port_and_site_root() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", " 8080 "), ("SITE_ROOT", "/srv/site")])).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.site_root, PathBuf::from("/srv/site"));
}

#[test]
fn blank_port_falls_back_to_default() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
}

#[test]
fn rejects_non_numeric_port() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "http"));
}

#[test]
fn rejects_out_of_range_port() {
    assert!(ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).is_err());
}

#[test]
fn rejects_blank_site_root() {
    let err = ServerConfig::from_lookup(lookup(&[("SITE_ROOT", "  ")])).unwrap_err();
    assert!(matches!(err, ConfigError::EmptySiteRoot));
}

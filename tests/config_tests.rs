//! Config path resolution.

use lockin::config::Config;

#[test]
fn test_config_paths_live_under_the_platform_config_dir() {
    let dir = Config::config_dir();
    let leaf = if cfg!(target_os = "windows") {
        "lockin"
    } else {
        ".lockin"
    };

    assert!(dir.ends_with(leaf), "unexpected config dir: {:?}", dir);
    assert_eq!(Config::config_file(), dir.join("lockin.conf"));
    assert_eq!(Config::database_file(), dir.join("lockin.sqlite"));
}

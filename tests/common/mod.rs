use assert_cmd::Command;

pub fn dca_dates_cmd() -> Command {
    let mut cmd = Command::cargo_bin("dca-dates").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

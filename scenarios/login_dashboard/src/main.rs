use tsung_runner::prelude::*;

/// Users log in, go straight to the dashboard and then wait for a bit.
fn build_scenario(cli: &TsungScenarioCli) -> ScenarioDocument {
    // A simple runner that tests a server running on localhost:2001
    let mut document = ScenarioDocument::new(cli.global_options());
    document.add_client("localhost", true, 10000);
    document.add_server("localhost", Some(2001));

    // 4 phases of 5 minutes each, where the users added per second grow exponentially.
    for arrival_rate in [1.0, 2.0, 4.0, 8.0] {
        document.add_phase(5.0, TimeUnit::Minute, arrival_rate, TimeUnit::Second);
    }

    let session = document.add_session("my_profile", None);

    session.add_transaction("login").add_request(
        Method::Post,
        "/api/auth/login",
        Some(
            FormData::new()
                .field("username", "%%_users_username%%")
                .field("password", "%%_users_password%%"),
        ),
    );

    session
        .add_transaction("dashboard")
        .add_request(Method::Get, "/api/me", None)
        .add_dynamic_variable("me_user_id", ExtractionKind::Json, "$.id");

    session.add_think_time(5.0, None);

    document
}

fn main() -> TsungResult<()> {
    let cli = init();
    log::info!("Building scenario: {}", env!("CARGO_PKG_NAME"));

    let document = build_scenario(&cli);
    run(&document, &cli)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser as _;

    #[test]
    fn scenario_renders_four_ramping_phases() {
        let cli = TsungScenarioCli::try_parse_from(["login_dashboard", "--print-only"]).unwrap();
        let xml = build_scenario(&cli).serialize();

        for (ordinal, rate) in [(1, 1), (2, 2), (3, 4), (4, 8)] {
            assert!(xml.contains(&format!(
                r#"<arrivalphase phase="{ordinal}" duration="5" unit="minute"><users arrivalrate="{rate}" unit="second" />"#
            )));
        }
        assert!(xml.contains(
            "contents=\"username=%25%25_users_username%25%25&amp;password=%25%25_users_password%25%25\""
        ));
    }
}

//! HTML scoreboard: form handling and page rendering for browser users.

use crate::{
    dto::{
        form::{EndGameForm, StartGameForm, UpdateScoreForm},
        matches::MatchSummary,
    },
    error::ServiceError,
    services::match_service,
    state::{MatchId, SharedState, Team},
};

/// Start a match from the board's team pickers.
pub fn start_from_form(state: &SharedState, form: &StartGameForm) -> Result<MatchId, ServiceError> {
    match_service::start_match(state, &form.country1, &form.country2)
}

/// Apply a score update posted from an active match row.
pub fn update_from_form(
    state: &SharedState,
    form: &UpdateScoreForm,
) -> Result<MatchSummary, ServiceError> {
    let id = parse_field(&form.match_index, "invalid id")?;
    let home_score = parse_field(&form.score1, "invalid home score")?;
    let away_score = parse_field(&form.score2, "invalid away score")?;
    match_service::update_score(state, id, home_score, away_score)
}

/// Finish the match posted from an active match row.
pub fn finish_from_form(
    state: &SharedState,
    form: &EndGameForm,
) -> Result<MatchSummary, ServiceError> {
    let id = parse_field(&form.match_index, "invalid id")?;
    match_service::finish_match(state, id)
}

fn parse_field<T: std::str::FromStr>(raw: &str, message: &str) -> Result<T, ServiceError> {
    raw.trim()
        .parse()
        .map_err(|_| ServiceError::InvalidInput(format!("{message}: `{raw}`")))
}

/// Render the whole board: start form, active matches, completed ranking.
pub fn render_page(state: &SharedState) -> String {
    let active = match_service::active_matches(state);
    let completed = match_service::ranked_matches(state);

    let mut html = String::with_capacity(4096);
    html.push_str(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n\
         <title>Matches</title>\n</head>\n<body>\n",
    );

    html.push_str("<h1>Selection of countries for the match</h1>\n");
    html.push_str("<form method=\"post\" action=\"/start_game\">\n");
    push_team_select(&mut html, "country1", "First country:");
    push_team_select(&mut html, "country2", "Second country:");
    html.push_str("<button type=\"submit\">Start a match</button>\n</form>\n");

    html.push_str("<h2>Active matches</h2>\n<ul>\n");
    for game in &active {
        push_active_row(&mut html, game);
    }
    html.push_str("</ul>\n");

    html.push_str("<h2>Completed matches</h2>\n<ul>\n");
    for game in &completed {
        html.push_str(&format!("<li>{}</li>\n", scoreline(game)));
    }
    html.push_str("</ul>\n</body>\n</html>\n");

    html
}

fn push_team_select(html: &mut String, name: &str, label: &str) {
    html.push_str(&format!("<label for=\"{name}\">{label}</label>\n"));
    html.push_str(&format!("<select name=\"{name}\" id=\"{name}\">\n"));
    for team in Team::ALL {
        let team = escape_html(team.name());
        html.push_str(&format!("<option value=\"{team}\">{team}</option>\n"));
    }
    html.push_str("</select>\n");
}

fn push_active_row(html: &mut String, game: &MatchSummary) {
    let id = game.id;
    html.push_str(&format!(
        "<li>\n{line}\n\
         <form method=\"post\" action=\"/update_score\">\n\
         <input type=\"hidden\" name=\"matchIndex\" value=\"{id}\">\n\
         <input type=\"number\" name=\"score1\" value=\"{home}\" min=\"0\">\n\
         <input type=\"number\" name=\"score2\" value=\"{away}\" min=\"0\">\n\
         <button type=\"submit\">Update the result</button>\n\
         </form>\n\
         <form method=\"post\" action=\"/end_game\">\n\
         <input type=\"hidden\" name=\"matchIndex\" value=\"{id}\">\n\
         <button type=\"submit\">Finish match</button>\n\
         </form>\n\
         </li>\n",
        line = scoreline(game),
        home = game.home_score,
        away = game.away_score,
    ));
}

fn scoreline(game: &MatchSummary) -> String {
    format!(
        "{} - {} | {} : {}",
        escape_html(game.home_team.name()),
        escape_html(game.away_team.name()),
        game.home_score,
        game.away_score
    )
}

/// Escape the characters that are significant in HTML text and attribute values.
fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;

    fn update_form(id: &str, home: &str, away: &str) -> UpdateScoreForm {
        UpdateScoreForm {
            match_index: id.into(),
            score1: home.into(),
            score2: away.into(),
        }
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("South Africa"), "South Africa");
    }

    #[test]
    fn unparsable_fields_are_named_in_the_error() {
        let state = AppState::new();
        let id = match_service::start_match(&state, "USA", "Italy")
            .unwrap()
            .to_string();

        let cases = [
            (update_form("abc", "1", "1"), "invalid id"),
            (update_form(&id, "-1", "1"), "invalid home score"),
            (update_form(&id, "1", ""), "invalid away score"),
        ];
        for (form, expected) in cases {
            match update_from_form(&state, &form) {
                Err(ServiceError::InvalidInput(message)) => assert!(message.starts_with(expected)),
                other => panic!("expected invalid input, got {other:?}"),
            }
        }

        let summary = update_from_form(&state, &update_form(&id, "3", " 2 ")).unwrap();
        assert_eq!((summary.home_score, summary.away_score), (3, 2));
    }

    #[test]
    fn missing_start_fields_are_invalid_teams() {
        let state = AppState::new();
        let form = StartGameForm {
            country1: "Brazil".into(),
            ..Default::default()
        };
        assert!(matches!(
            start_from_form(&state, &form),
            Err(ServiceError::InvalidInput(_))
        ));
        assert!(state.active().is_empty());
    }

    #[test]
    fn empty_board_offers_every_team_twice() {
        let page = render_page(&AppState::new());

        for team in Team::ALL {
            let option = format!("<option value=\"{0}\">{0}</option>", team.name());
            assert_eq!(page.matches(&option).count(), 2, "{team}");
        }
        assert!(page.contains("<h2>Active matches</h2>\n<ul>\n</ul>"));
        assert!(page.ends_with("</ul>\n</body>\n</html>\n"));
    }

    #[test]
    fn page_lists_both_panels() {
        let state = AppState::new();
        let finished = match_service::start_match(&state, "Germany", "France").unwrap();
        match_service::update_score(&state, finished, 2, 2).unwrap();
        finish_from_form(
            &state,
            &EndGameForm {
                match_index: finished.to_string(),
            },
        )
        .unwrap();
        let live = match_service::start_match(&state, "South Africa", "UK").unwrap();
        match_service::update_score(&state, live, 1, 0).unwrap();

        let page = render_page(&state);

        assert!(page.contains("<option value=\"South Africa\">South Africa</option>"));
        assert!(page.contains("South Africa - UK | 1 : 0"));
        assert!(page.contains(&format!("name=\"matchIndex\" value=\"{live}\"")));
        assert!(page.contains("<li>Germany - France | 2 : 2</li>"));

        let active_at = page.find("Active matches").unwrap();
        let completed_at = page.find("Completed matches").unwrap();
        let live_at = page.find("South Africa - UK").unwrap();
        let finished_at = page.find("Germany - France").unwrap();
        assert!(active_at < live_at && live_at < completed_at);
        assert!(completed_at < finished_at);
    }
}

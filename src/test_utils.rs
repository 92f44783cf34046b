#[cfg(test)]
pub mod test_helpers {
    use std::net::TcpListener;
    use std::sync::mpsc;
    use std::time::Duration;

    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::app::App;
    use crate::config::Config;
    use crate::focus::HOME_LOCATION;
    use crate::suggest::{SuggestRequest, SuggestResponse};

    pub fn test_app() -> App {
        App::new(&Config::default(), HOME_LOCATION)
    }

    /// App wired to in-test channels instead of a worker thread
    pub fn connected_app(
        config: &Config,
    ) -> (App, UnboundedReceiver<SuggestRequest>, mpsc::Sender<SuggestResponse>) {
        let (request_tx, request_rx) = unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel();
        let mut app = App::new(config, HOME_LOCATION);
        app.suggest.set_channels(request_tx, response_rx);
        (app, request_rx, response_tx)
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.handle_key_event(key(KeyCode::Char(ch)));
        }
    }

    pub const SUGGEST_PATH: &str = "/elasticbook/suggest";
    pub const SEARCH_PATH: &str = "/elasticbook/search";

    /// Mock elasticbook service answering POSTs on `route` with a canned body
    pub async fn mock_service(route: &str, status: u16, body: &str) -> MockServer {
        mock_slow_service(route, status, body, Duration::ZERO).await
    }

    pub async fn mock_slow_service(
        route: &str,
        status: u16,
        body: &str,
        delay: Duration,
    ) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(route))
            .and(body_string_contains("term="))
            .respond_with(
                ResponseTemplate::new(status)
                    .set_body_raw(body.to_string(), "application/json")
                    .set_delay(delay),
            )
            .mount(&server)
            .await;
        server
    }

    pub fn endpoint(server: &MockServer, route: &str) -> String {
        format!("{}{}", server.uri(), route)
    }

    /// URL of a loopback port nothing is listening on
    pub fn unused_endpoint() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}/elasticbook/suggest", addr)
    }
}

//! Shared networking constants used by client and server.

/// Public rate API queried by the server for the USD→BRL quote.
pub const UPSTREAM_URL: &str = "https://economia.awesomeapi.com.br/json/last/USD-BRL";
/// Key of the quote object inside the upstream JSON document.
pub const UPSTREAM_PAIR_KEY: &str = "USDBRL";
/// HTTP port the quote service listens on.
pub const SERVICE_PORT: u16 = 8080;
/// Path of the quote endpoint.
pub const QUOTE_PATH: &str = "/cotacao";
/// Default URL the client calls.
pub const SERVICE_URL: &str = "http://localhost:8080/cotacao";

/// Helper to format an address with a port like "ip:port".
pub fn addr(ip: &str, port: u16) -> String {
    format!("{}:{}", ip, port)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_url_points_at_quote_path() {
        let expected = format!("http://{}{}", addr("localhost", SERVICE_PORT), QUOTE_PATH);
        assert_eq!(SERVICE_URL, expected);
    }
}

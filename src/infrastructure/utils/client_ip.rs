use actix_web::{dev::Payload, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

/// Extract the client's IP address: first entry of X-Forwarded-For when
/// present, otherwise the peer address of the connection.
pub fn client_ip(req: &HttpRequest) -> Option<String> {
    if let Some(forwarded) = req.headers().get("x-forwarded-for") {
        if let Ok(value) = forwarded.to_str() {
            if let Some(first) = value.split(',').next() {
                let first = first.trim();
                if !first.is_empty() {
                    return Some(first.to_string());
                }
            }
        }
    }
    req.peer_addr().map(|addr| addr.ip().to_string())
}

/// Extractor wrapper around `client_ip`.
/// Usage: add `ip: ClientIp` as a parameter to a handler function.
#[derive(Debug, Clone)]
pub struct ClientIp(pub Option<String>);

impl FromRequest for ClientIp {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Ok(ClientIp(client_ip(req))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn forwarded_for_takes_first_entry() {
        let req = TestRequest::default()
            .insert_header(("x-forwarded-for", "1.2.3.4, 5.6.7.8"))
            .to_http_request();
        assert_eq!(client_ip(&req), Some("1.2.3.4".to_string()));
    }

    #[test]
    fn forwarded_for_entries_are_trimmed() {
        let req = TestRequest::default()
            .insert_header(("x-forwarded-for", "  9.8.7.6 , 5.6.7.8"))
            .to_http_request();
        assert_eq!(client_ip(&req), Some("9.8.7.6".to_string()));
    }

    #[test]
    fn falls_back_to_peer_address() {
        let req = TestRequest::default()
            .peer_addr("10.0.0.9:4321".parse().unwrap())
            .to_http_request();
        assert_eq!(client_ip(&req), Some("10.0.0.9".to_string()));
    }

    #[test]
    fn no_header_no_peer_yields_none() {
        let req = TestRequest::default().to_http_request();
        assert_eq!(client_ip(&req), None);
    }
}

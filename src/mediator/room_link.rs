use std::sync::Arc;

use tracing::{debug, info};

use crate::services::{History, RoomJoiner};

/// Extract the room identifier from a join-room path.
///
/// Looks only at the first two non-empty segments among the first three
/// `/`-separated pieces, so `/listentogether/Room42/extra` yields `Room42`.
/// The keyword match ignores ASCII case. Identifiers that do not
/// percent-decode to UTF-8 are rejected.
pub fn parse_room_link(pathname: &str, keyword: &str) -> Option<String> {
    let mut segments = pathname.split('/').take(3).filter(|segment| !segment.is_empty());

    let route = segments.next()?;
    let encoded_id = segments.next()?;

    if !route.eq_ignore_ascii_case(keyword) {
        return None;
    }

    match urlencoding::decode(encoded_id) {
        Ok(id) => Some(id.into_owned()),
        Err(e) => {
            debug!(segment = encoded_id, error = %e, "Undecodable room identifier");
            None
        }
    }
}

/// Redirects join-room links to a room join and undoes the navigation.
pub struct RoomLinkInterceptor {
    keyword: String,
    joiner: Arc<dyn RoomJoiner>,
    history: Arc<dyn History>,
}

impl RoomLinkInterceptor {
    /// Interceptor for routes whose first segment is `keyword`.
    pub fn new(
        keyword: impl Into<String>,
        joiner: Arc<dyn RoomJoiner>,
        history: Arc<dyn History>,
    ) -> Self {
        Self {
            keyword: keyword.into(),
            joiner,
            history,
        }
    }

    /// Handle a navigation. Returns whether it was intercepted.
    pub fn on_navigate(&self, pathname: Option<&str>) -> bool {
        let Some(room_id) = pathname.and_then(|path| parse_room_link(path, &self.keyword)) else {
            return false;
        };

        info!(room = %room_id, "Joining room from link");
        self.joiner.join_room(&room_id);
        self.history.go_back();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYWORD: &str = "listentogether";

    #[test]
    fn extracts_second_segment() {
        assert_eq!(
            parse_room_link("/listentogether/Room42/extra", KEYWORD).as_deref(),
            Some("Room42")
        );
        assert_eq!(
            parse_room_link("/ListenTogether/abc", KEYWORD).as_deref(),
            Some("abc")
        );
    }

    #[test]
    fn decodes_identifier() {
        assert_eq!(
            parse_room_link("/listentogether/My%20Room%21", KEYWORD).as_deref(),
            Some("My Room!")
        );
    }

    #[test]
    fn rejects_non_matching_paths() {
        assert_eq!(parse_room_link("/listentogether", KEYWORD), None);
        assert_eq!(parse_room_link("/listentogether/", KEYWORD), None);
        assert_eq!(parse_room_link("/album/Room42", KEYWORD), None);
        assert_eq!(parse_room_link("", KEYWORD), None);
        // The identifier must sit within the first three pieces.
        assert_eq!(parse_room_link("//listentogether/Room42", KEYWORD), None);
    }

    #[test]
    fn rejects_invalid_utf8_escape() {
        assert_eq!(parse_room_link("/listentogether/%FF", KEYWORD), None);
    }
}

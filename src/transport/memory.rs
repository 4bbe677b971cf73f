use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::traits::{Reply, Transport, TransportError};

/// Transport that records every command and answers from a reply queue.
///
/// An empty queue answers with a transport error.
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Result<Reply, TransportError>>>,
    commands: Mutex<Vec<Vec<String>>>,
}

impl ScriptedTransport {
    #[must_use]
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            commands: Mutex::new(Vec::new()),
        }
    }

    /// Queue a success reply
    pub fn push_reply(&self, reply: impl Into<Reply>) {
        self.replies.lock().push_back(Ok(reply.into()));
    }

    /// Queue an engine error reply
    pub fn push_error(&self, message: impl Into<String>) {
        self.replies
            .lock()
            .push_back(Err(TransportError::Protocol(message.into())));
    }

    /// Every command issued so far, oldest first
    #[must_use]
    pub fn commands(&self) -> Vec<Vec<String>> {
        self.commands.lock().clone()
    }

    /// The most recent command
    #[must_use]
    pub fn last_command(&self) -> Option<Vec<String>> {
        self.commands.lock().last().cloned()
    }

    /// Replies not yet consumed
    #[must_use]
    pub fn pending(&self) -> usize {
        self.replies.lock().len()
    }
}

impl Default for ScriptedTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn execute(&self, tokens: &[String]) -> Result<Reply, TransportError> {
        self.commands.lock().push(tokens.to_vec());
        self.replies
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Transport("no scripted reply".into())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_new_transport_is_empty() {
        let transport = ScriptedTransport::new();
        assert_eq!(transport.pending(), 0);
        assert!(transport.commands().is_empty());
        assert!(transport.last_command().is_none());
    }

    #[tokio::test]
    async fn test_replies_in_order() {
        let transport = ScriptedTransport::new();
        transport.push_reply("OK");
        transport.push_error("Unknown Index name");

        let first = transport.execute(&tokens(&["FT.DROP", "a"])).await;
        let second = transport.execute(&tokens(&["FT.DROP", "b"])).await;

        assert_eq!(first, Ok(Reply::from("OK")));
        assert_eq!(second, Err(TransportError::Protocol("Unknown Index name".into())));
        assert_eq!(transport.commands().len(), 2);
        assert_eq!(transport.last_command().unwrap(), ["FT.DROP", "b"]);
    }

    #[tokio::test]
    async fn test_exhausted_queue_is_transport_error() {
        let transport = ScriptedTransport::new();
        let result = transport.execute(&tokens(&["FT.INFO", "idx"])).await;
        assert!(matches!(result, Err(TransportError::Transport(_))));
    }

    #[tokio::test]
    async fn test_execute_batch_keeps_order() {
        let transport = ScriptedTransport::new();
        transport.push_reply("OK");
        transport.push_error("Document already exists");
        transport.push_reply("OK");

        let commands = vec![
            tokens(&["FT.ADD", "idx", "1"]),
            tokens(&["FT.ADD", "idx", "2"]),
            tokens(&["FT.ADD", "idx", "3"]),
        ];
        let results = transport.execute_batch(&commands).await;

        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert_eq!(
            results[1],
            Err(TransportError::Protocol("Document already exists".into()))
        );
        assert!(results[2].is_ok());
        assert_eq!(transport.commands(), commands);
    }
}

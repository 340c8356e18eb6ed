use crossbeam_channel as channel;

use super::request::Request;

/// Host operations buffered during one command invocation, drained and
/// applied by the embedding afterwards. Request order is emission order.
pub struct RequestQueue {
    queue: channel::Sender<Request>,
    reader: channel::Receiver<Request>,
}

impl Default for RequestQueue {
    fn default() -> Self {
        let (queue, reader) = channel::unbounded();
        Self { queue, reader }
    }
}

impl RequestQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&self, req: Request) {
        self.queue.send(req);
    }

    pub fn drain(&self) -> Vec<Request> {
        let mut buf = Vec::with_capacity(self.reader.len());
        while let Some(req) = self.reader.try_recv() {
            buf.push(req)
        }
        buf
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{Output, Target};

    #[test]
    fn drain_keeps_emission_order() {
        let queue = RequestQueue::new();
        queue.enqueue(Request::Close { buffer: 3 });
        queue.enqueue(Request::Print {
            target: Target::Core,
            output: Output::plain("(none)"),
        });

        assert_eq!(queue.len(), 2);
        assert_eq!(
            queue.drain(),
            vec![
                Request::Close { buffer: 3 },
                Request::Print {
                    target: Target::Core,
                    output: Output::plain("(none)"),
                },
            ]
        );
        assert!(queue.is_empty());
    }
}

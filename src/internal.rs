mod broadcaster;
mod mailbox;

pub(crate) use broadcaster::Broadcaster;
pub(crate) use mailbox::Mailbox;

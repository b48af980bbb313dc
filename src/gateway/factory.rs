use crate::gateway::NotifierVia;
use crate::gateway::email::notifier::EmailNotifier;
use crate::gateway::notify::Notifier;
use crate::gateway::sms::notifier::SmsNotifier;

pub fn create_notifier(via: NotifierVia) -> Box<dyn Notifier> {
    match via {
        NotifierVia::Email => {
            Box::new(EmailNotifier::new("member@library.com"))
        }
        NotifierVia::Sms => {
            Box::new(SmsNotifier::new("+1234567890"))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::gateway::NotifierVia;
    use crate::gateway::factory::create_notifier;

    #[tokio::test]
    async fn test_should_create_notifiers() {
        let email = create_notifier(NotifierVia::Email);
        assert!(email.send("test").await);
        let sms = create_notifier(NotifierVia::Sms);
        assert!(sms.send("test").await);
    }
}

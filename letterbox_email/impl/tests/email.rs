use letterbox_email_contracts::{Email, EmailService};
use letterbox_email_impl::EmailServiceImpl;
use tokio::{
    io::{AsyncBufReadExt, AsyncWriteExt, BufReader},
    net::{TcpListener, TcpStream},
    sync::mpsc,
};

const ACCEPTED: &str = "250 2.0.0 Ok: queued\r\n";
const REJECTED: &str = "554 5.7.1 Message rejected\r\n";

#[tokio::test]
async fn send_email() {
    let mut server = SmtpServer::start(ACCEPTED).await;
    let email = server.client().await;

    let result = email.send(contact_email()).await.unwrap();

    assert!(result);

    let transaction = server.transactions.recv().await.unwrap();
    assert!(transaction.has_command("MAIL FROM:<hello@example.com>"));
    assert!(transaction.has_command("RCPT TO:<contact@example.com>"));
    assert!(transaction.has_header("From: hello@example.com"));
    assert!(transaction.has_header("To: contact@example.com"));
    assert!(transaction.has_header("Reply-To: max@example.de"));
    assert!(transaction.has_header("Subject: Contact Form: Message from Max"));
    assert!(transaction.data.contains("Hello World!"));
}

#[tokio::test]
async fn rejected_by_server() {
    let server = SmtpServer::start(REJECTED).await;
    let email = server.client().await;

    let result = email.send(contact_email()).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn unsupported_reply_to() {
    let mut server = SmtpServer::start(ACCEPTED).await;
    let email = server.client().await;

    let result = email
        .send(Email {
            reply_to: Some("a@b..c".into()),
            ..contact_email()
        })
        .await;

    assert!(result.is_err());
    assert!(server.transactions.try_recv().is_err());
}

#[tokio::test]
async fn unreachable_server() {
    let email = EmailServiceImpl::new("smtp://127.0.0.1:1", "hello@example.com".parse().unwrap())
        .await
        .unwrap();

    assert!(email.send(contact_email()).await.is_err());
    assert!(email.ping().await.is_err());
}

#[tokio::test]
async fn ping() {
    let server = SmtpServer::start(ACCEPTED).await;
    let email = server.client().await;

    email.ping().await.unwrap();
}

fn contact_email() -> Email {
    Email {
        recipient: "contact@example.com".parse().unwrap(),
        subject: "Contact Form: Message from Max".into(),
        body: "Hello World!".into(),
        reply_to: Some("max@example.de".into()),
    }
}

/// Minimal SMTP server that accepts every command and answers the end of
/// each message with a fixed reply.
struct SmtpServer {
    url: String,
    transactions: mpsc::UnboundedReceiver<Transaction>,
}

#[derive(Debug, Default)]
struct Transaction {
    commands: Vec<String>,
    data: String,
}

impl Transaction {
    fn has_command(&self, prefix: &str) -> bool {
        self.commands.iter().any(|x| x.starts_with(prefix))
    }

    fn has_header(&self, header: &str) -> bool {
        self.data.lines().any(|x| x == header)
    }
}

impl SmtpServer {
    async fn start(final_reply: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let (tx, rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                tokio::spawn(session(stream, final_reply, tx.clone()));
            }
        });

        Self {
            url: format!("smtp://127.0.0.1:{port}"),
            transactions: rx,
        }
    }

    async fn client(&self) -> EmailServiceImpl {
        EmailServiceImpl::new(&self.url, "hello@example.com".parse().unwrap())
            .await
            .unwrap()
    }
}

async fn session(
    stream: TcpStream,
    final_reply: &str,
    transactions: mpsc::UnboundedSender<Transaction>,
) -> std::io::Result<()> {
    let (reader, mut writer) = stream.into_split();
    let mut lines = BufReader::new(reader).lines();
    writer.write_all(b"220 localhost ESMTP\r\n").await?;

    let mut transaction = Transaction::default();
    let mut in_data = false;
    while let Some(line) = lines.next_line().await? {
        if in_data {
            if line == "." {
                in_data = false;
                let _ = transactions.send(std::mem::take(&mut transaction));
                writer.write_all(final_reply.as_bytes()).await?;
            } else {
                transaction.data.push_str(&line);
                transaction.data.push('\n');
            }
            continue;
        }

        let verb = line
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_ascii_uppercase();
        transaction.commands.push(line);

        match verb.as_str() {
            "DATA" => {
                in_data = true;
                writer.write_all(b"354 End data with <CR><LF>.<CR><LF>\r\n").await?;
            }
            "QUIT" => {
                writer.write_all(b"221 Bye\r\n").await?;
                break;
            }
            _ => writer.write_all(b"250 OK\r\n").await?,
        }
    }

    Ok(())
}

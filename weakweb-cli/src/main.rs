use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use weakweb_client::{
    AuthResponse, ClientErrorReport, Post, User, UserUpdate, WeakwebClient, WeakwebError,
};

const TOKEN_FILE: &str = ".weakweb_token";
const DEFAULT_SERVER: &str = "http://localhost:8080";

#[derive(Debug, Parser)]
#[command(name = "weakweb-cli", version, about = "CLI клиент для Weak Website")]
struct Cli {
    /// Адрес сервера (по умолчанию из WEAKWEB_SERVER_URL или localhost:8080).
    #[arg(long, global = true)]
    server: Option<String>,

    /// Печатать ответы как JSON вместо человекочитаемого вывода.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Регистрация пользователя.
    ///
    /// `--role` уходит на сервер как есть (демонстрация mass assignment).
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long, default_value = "user")]
        role: String,
    },
    /// Вход пользователя (токен сохраняется в .weakweb_token).
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Смена пароля (требует токен).
    ChangePassword {
        #[arg(long)]
        current_password: String,
        #[arg(long)]
        new_password: String,
    },
    /// Текущий пользователь (требует токен).
    Me,
    /// Операции с пользователями (требуют токен).
    #[command(subcommand)]
    User(UserCommand),
    /// Операции с постами.
    #[command(subcommand)]
    Post(PostCommand),
    /// Операции с файлами.
    #[command(subcommand)]
    File(FileCommand),
    /// Отправка отчёта о клиентской ошибке (fire-and-forget).
    ReportError {
        #[arg(long)]
        error: String,
        #[arg(long)]
        field: Option<String>,
        #[arg(long)]
        feature: Option<String>,
        #[arg(long)]
        message: String,
    },
}

#[derive(Debug, Subcommand)]
enum UserCommand {
    /// Список всех пользователей.
    List,
    /// Пользователь по id.
    Get {
        #[arg(long)]
        id: i64,
    },
    /// Создание пользователя.
    Create {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long, default_value = "user")]
        role: String,
    },
    /// Частичное обновление пользователя.
    Update {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        password: Option<String>,
        #[arg(long)]
        role: Option<String>,
    },
    /// Удаление пользователя.
    Delete {
        #[arg(long)]
        id: i64,
    },
}

#[derive(Debug, Subcommand)]
enum PostCommand {
    /// Все посты (новые первыми).
    List,
    /// Посты одного пользователя.
    ListUser {
        #[arg(long)]
        user_id: i64,
    },
    /// Создание поста (требует токен).
    Create {
        #[arg(long)]
        content: String,
    },
    /// Удаление поста (требует токен).
    Delete {
        #[arg(long)]
        id: i64,
    },
}

#[derive(Debug, Subcommand)]
enum FileCommand {
    /// Загрузка файла на сервер.
    Upload {
        #[arg(long)]
        path: PathBuf,
    },
    /// Скачивание файла по имени.
    Download {
        #[arg(long)]
        filename: String,
        /// Куда сохранить (по умолчанию имя файла в текущем каталоге).
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Скачивание файла по произвольному пути (path traversal демо).
    Retrieve {
        #[arg(long)]
        path: String,
        /// Куда сохранить (по умолчанию печатается в stdout).
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    init_logging();

    if let Err(err) = run().await {
        eprintln!("Ошибка: {err}");
        process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init()
        .ok();
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let server = resolve_server(cli.server);
    let mut client = WeakwebClient::new(server);

    if let Some(token) = load_token().context("не удалось прочитать .weakweb_token")? {
        client.set_token(token);
    }

    match cli.command {
        Command::Signup {
            email,
            password,
            role,
        } => {
            let auth = client
                .signup(&email, &password, &role)
                .await
                .map_err(map_client_error)?;
            persist_token(&client).context("не удалось сохранить токен")?;
            print_auth("Регистрация", &auth, cli.json)?;
        }
        Command::Login { email, password } => {
            let auth = client
                .login(&email, &password)
                .await
                .map_err(map_client_error)?;
            persist_token(&client).context("не удалось сохранить токен")?;
            if auth.token.is_none() {
                bail!(
                    "вход не выполнен: {}",
                    auth.error.as_deref().unwrap_or("сервер не вернул токен")
                );
            }
            print_auth("Вход выполнен", &auth, cli.json)?;
        }
        Command::ChangePassword {
            current_password,
            new_password,
        } => {
            let auth = client
                .change_password(&current_password, &new_password)
                .await
                .map_err(map_client_error)?;
            if let Some(error) = &auth.error {
                bail!("смена пароля не выполнена: {error}");
            }
            print_auth("Пароль изменён", &auth, cli.json)?;
        }
        Command::Me => {
            let user = client.me().await.map_err(map_client_error)?;
            print_user("Текущий пользователь", &user, cli.json)?;
        }
        Command::User(command) => run_user_command(&client, command, cli.json).await?,
        Command::Post(command) => run_post_command(&client, command, cli.json).await?,
        Command::File(command) => run_file_command(&client, command).await?,
        Command::ReportError {
            error,
            field,
            feature,
            message,
        } => {
            let report = ClientErrorReport {
                error,
                field,
                feature,
                message,
            };
            // Fire-and-forget: неуспех отправки не считается ошибкой команды.
            let _ = client.report_client_error(&report).await;
            println!("Отчёт отправлен");
        }
    }

    Ok(())
}

async fn run_user_command(client: &WeakwebClient, command: UserCommand, json: bool) -> Result<()> {
    match command {
        UserCommand::List => {
            let users = client.list_users().await.map_err(map_client_error)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&users)?);
            } else {
                println!("Пользователей: {}", users.len());
                for user in &users {
                    println!("- [{}] {} ({})", user.id, user.email, user.role);
                }
            }
        }
        UserCommand::Get { id } => {
            let user = client.get_user(id).await.map_err(map_client_error)?;
            print_user("Пользователь", &user, json)?;
        }
        UserCommand::Create {
            email,
            password,
            role,
        } => {
            let user = client
                .create_user(&email, &password, &role)
                .await
                .map_err(map_client_error)?;
            print_user("Пользователь создан", &user, json)?;
        }
        UserCommand::Update {
            id,
            email,
            password,
            role,
        } => {
            let update = UserUpdate {
                email,
                password,
                role,
            };
            if update.is_empty() {
                bail!("нечего обновлять: укажите --email, --password или --role");
            }
            let user = client
                .update_user(id, &update)
                .await
                .map_err(map_client_error)?;
            print_user("Пользователь обновлён", &user, json)?;
        }
        UserCommand::Delete { id } => {
            client.delete_user(id).await.map_err(map_client_error)?;
            println!("Пользователь удалён: id={id}");
        }
    }
    Ok(())
}

async fn run_post_command(client: &WeakwebClient, command: PostCommand, json: bool) -> Result<()> {
    match command {
        PostCommand::List => {
            let posts = client.list_posts().await.map_err(map_client_error)?;
            print_posts(&posts, json)?;
        }
        PostCommand::ListUser { user_id } => {
            let posts = client
                .list_user_posts(user_id)
                .await
                .map_err(map_client_error)?;
            print_posts(&posts, json)?;
        }
        PostCommand::Create { content } => {
            let post = client
                .create_post(&content)
                .await
                .map_err(map_client_error)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&post)?);
            } else {
                println!("Пост создан: id={}", post.id);
            }
        }
        PostCommand::Delete { id } => {
            client.delete_post(id).await.map_err(map_client_error)?;
            println!("Пост удалён: id={id}");
        }
    }
    Ok(())
}

async fn run_file_command(client: &WeakwebClient, command: FileCommand) -> Result<()> {
    match command {
        FileCommand::Upload { path } => {
            let uploaded = client.upload_file(&path).await.map_err(map_client_error)?;
            println!("Файл загружен: {}", uploaded.filename);
        }
        FileCommand::Download { filename, output } => {
            let bytes = client
                .download_file(&filename)
                .await
                .map_err(map_client_error)?;
            let output = output.unwrap_or_else(|| PathBuf::from(&filename));
            fs::write(&output, &bytes)
                .with_context(|| format!("не удалось записать {}", output.display()))?;
            println!("Сохранено: {} ({} байт)", output.display(), bytes.len());
        }
        FileCommand::Retrieve { path, output } => {
            let bytes = client
                .retrieve_file(&path)
                .await
                .map_err(map_client_error)?;
            match output {
                Some(output) => {
                    fs::write(&output, &bytes)
                        .with_context(|| format!("не удалось записать {}", output.display()))?;
                    println!("Сохранено: {} ({} байт)", output.display(), bytes.len());
                }
                None => {
                    println!("{}", String::from_utf8_lossy(&bytes));
                }
            }
        }
    }
    Ok(())
}

fn resolve_server(server: Option<String>) -> String {
    let raw = server
        .or_else(|| std::env::var("WEAKWEB_SERVER_URL").ok())
        .unwrap_or_else(|| DEFAULT_SERVER.to_string());
    normalize_server(raw)
}

fn normalize_server(server: String) -> String {
    if server.starts_with("http://") || server.starts_with("https://") {
        return server;
    }

    format!("http://{server}")
}

fn parse_token_content(raw: &str) -> Option<String> {
    let token = raw.trim().to_string();
    if token.is_empty() {
        return None;
    }
    Some(token)
}

fn load_token() -> io::Result<Option<String>> {
    if !Path::new(TOKEN_FILE).exists() {
        return Ok(None);
    }

    let raw = fs::read_to_string(TOKEN_FILE)?;
    Ok(parse_token_content(&raw))
}

fn persist_token(client: &WeakwebClient) -> io::Result<()> {
    if let Some(token) = client.get_token() {
        fs::write(TOKEN_FILE, token)?;
    }
    Ok(())
}

fn map_client_error(err: WeakwebError) -> anyhow::Error {
    let message = match err {
        WeakwebError::Unauthorized => {
            "требуется авторизация: выполните `weakweb-cli login ...` или `weakweb-cli signup ...`"
                .to_string()
        }
        WeakwebError::NotFound => "ресурс не найден".to_string(),
        WeakwebError::InvalidRequest(message) => format!("некорректный запрос: {message}"),
        WeakwebError::Http(err) => format!("ошибка HTTP: {err}"),
    };
    anyhow::anyhow!(message)
}

fn print_auth(title: &str, auth: &AuthResponse, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(auth)?);
        return Ok(());
    }

    println!("{title}");
    if let Some(message) = &auth.message {
        println!("message: {message}");
    }
    if let Some(token) = &auth.token {
        println!("token: {token}");
    }
    if let Some(strength) = auth.password_strength {
        println!("password_strength: {strength}");
    }
    if let Some(feedback) = &auth.strength_feedback {
        println!("strength_feedback: {feedback}");
    }
    if auth.is_breached == Some(true) {
        println!("внимание: пароль встречался в утечках");
    }
    Ok(())
}

fn print_user(title: &str, user: &User, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(user)?);
        return Ok(());
    }

    println!("{title}");
    println!("id: {}", user.id);
    println!("email: {}", user.email);
    println!("role: {}", user.role);
    // Бэкенд отдаёт пароль открытым текстом (учебная уязвимость).
    println!("password: {}", user.password);
    Ok(())
}

fn print_posts(posts: &[Post], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(posts)?);
        return Ok(());
    }

    println!("Постов: {}", posts.len());
    for post in posts {
        println!(
            "- [{}] {} ({}, {})",
            post.id, post.content, post.user_email, post.created_at
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_server_keeps_scheme() {
        let s = normalize_server("https://example.com:8080".to_string());
        assert_eq!(s, "https://example.com:8080");
    }

    #[test]
    fn normalize_server_adds_http_scheme() {
        let s = normalize_server("127.0.0.1:8080".to_string());
        assert_eq!(s, "http://127.0.0.1:8080");
    }

    #[test]
    fn parse_token_content_trims_whitespace() {
        let token = parse_token_content("  abc.def.ghi  ");
        assert_eq!(token.as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn parse_token_content_rejects_blank() {
        let token = parse_token_content("   ");
        assert!(token.is_none());
    }
}

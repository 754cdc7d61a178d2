use super::credentials::Credentials;
use super::DbSizeError;
use async_trait::async_trait;
use std::fmt;
use std::process::Stdio;
use tokio::io::AsyncReadExt;
use tokio::process::Command;

#[derive(Debug)]
pub struct FetchData {
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientInvocation {
    pub program: String,
    pub args: Vec<String>,
    /// Index into `args` of the argument carrying the password.
    pub secret: Option<usize>,
}

impl ClientInvocation {
    pub fn new<P, I, A>(program: P, args: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        ClientInvocation {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            secret: None,
        }
    }

    /// `<program> -u <user> -p<password> -e <query>`
    pub fn mysql(program: &str, creds: &Credentials, query: &str) -> Self {
        ClientInvocation {
            secret: Some(2),
            ..ClientInvocation::new(
                program,
                [
                    "-u".to_owned(),
                    creds.user.clone(),
                    format!("-p{}", creds.password),
                    "-e".to_owned(),
                    query.to_owned(),
                ],
            )
        }
    }
}

impl fmt::Display for ClientInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for (i, arg) in self.args.iter().enumerate() {
            if self.secret == Some(i) {
                write!(f, " -p****")?;
            } else if arg.contains(char::is_whitespace) {
                write!(f, " {:?}", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

#[async_trait]
pub trait Fetch {
    async fn fetch(&self, invocation: &ClientInvocation) -> Result<FetchData, DbSizeError>;
}

/// Runs the client to completion and keeps stdout and stderr interleaved in
/// one buffer, in the order the chunks arrive.
#[derive(Debug)]
pub struct CommandFetcher;

#[async_trait]
impl Fetch for CommandFetcher {
    async fn fetch(&self, invocation: &ClientInvocation) -> Result<FetchData, DbSizeError> {
        let mut child = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| DbSizeError::Spawn {
                program: invocation.program.clone(),
                source,
            })?;

        let mut stdout = child.stdout.take();
        let mut stderr = child.stderr.take();
        let mut data = vec![];
        let mut out_buf = [0u8; 4096];
        let mut err_buf = [0u8; 4096];

        while stdout.is_some() || stderr.is_some() {
            tokio::select! {
                n = read_some(&mut stdout, &mut out_buf), if stdout.is_some() => {
                    match n? {
                        0 => stdout = None,
                        n => data.extend_from_slice(&out_buf[..n]),
                    }
                }
                n = read_some(&mut stderr, &mut err_buf), if stderr.is_some() => {
                    match n? {
                        0 => stderr = None,
                        n => data.extend_from_slice(&err_buf[..n]),
                    }
                }
            }
        }

        let status = child.wait().await?;
        if !status.success() {
            return Err(DbSizeError::ClientFailed {
                status,
                output: String::from_utf8_lossy(&data).into_owned(),
            });
        }

        Ok(FetchData { data })
    }
}

async fn read_some<R>(pipe: &mut Option<R>, buf: &mut [u8]) -> std::io::Result<usize>
where
    R: tokio::io::AsyncRead + Unpin,
{
    match pipe {
        Some(r) => r.read(buf).await,
        None => Ok(0),
    }
}

pub async fn fetch(invocation: &ClientInvocation) -> Result<FetchData, DbSizeError> {
    CommandFetcher.fetch(invocation).await
}

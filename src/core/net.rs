// src/core/net.rs

// HTTP/1.0 GET over TCP (std-only)

use std::{
    error::Error,
    io::{Read, Write},
    net::TcpStream,
    time::Duration,
};

use super::html::{first_link, next_elem_block_ci};

pub struct Response {
    pub status: u16,
    pub body: String,
}

pub fn http_get(host: &str, path: &str) -> Result<Response, Box<dyn Error>> {
    let mut s = TcpStream::connect((host, 80))?;
    s.set_read_timeout(Some(Duration::from_secs(15)))?;
    s.set_write_timeout(Some(Duration::from_secs(15)))?;

    let req = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: pfsrd_scrape/0.3\r\nConnection: close\r\n\r\n",
        path, host
    );
    s.write_all(req.as_bytes())?;
    s.flush()?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf)?;
    let resp = String::from_utf8_lossy(&buf);

    let status_line = resp.split("\r\n").next().unwrap_or("");
    let status: u16 = status_line
        .split_whitespace()
        .nth(1)
        .and_then(|c| c.parse().ok())
        .unwrap_or(0);
    let body_idx = resp.find("\r\n\r\n").ok_or("Malformed HTTP response")? + 4;
    Ok(Response {
        status,
        body: resp[body_idx..].to_string(),
    })
}

/// Fetch a full page by URL. Moved feat pages 404 with the new location
/// linked inside the error page's `<article>`; follow that link once before
/// giving up.
pub fn get_page(url: &str) -> Result<String, Box<dyn Error>> {
    let (host, path) = split_url(url)?;
    let resp = http_get(&host, &path)?;
    if resp.status == 200 {
        return Ok(resp.body);
    }
    if resp.status == 404 {
        if let Some((a_s, a_e)) = next_elem_block_ci(&resp.body, "article", 0) {
            if let Some(link) = first_link(&resp.body[a_s..a_e]) {
                let (host2, path2) = split_url(&link.href)?;
                let retry = http_get(&host2, &path2)?;
                if retry.status == 200 {
                    return Ok(retry.body);
                }
            }
        }
    }
    Err(format!("HTTP {} for {}", resp.status, url).into())
}

fn split_url(url: &str) -> Result<(String, String), Box<dyn Error>> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    if rest.is_empty() {
        return Err(format!("Bad URL: {}", url).into());
    }
    match rest.find('/') {
        Some(i) => Ok((rest[..i].to_string(), rest[i..].to_string())),
        None => Ok((rest.to_string(), s!("/"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_url_variants() {
        let (h, p) = split_url("https://www.d20pfsrd.com/feats/combat-feats").unwrap();
        assert_eq!(h, "www.d20pfsrd.com");
        assert_eq!(p, "/feats/combat-feats");

        let (h, p) = split_url("http://example.com").unwrap();
        assert_eq!(h, "example.com");
        assert_eq!(p, "/");
    }
}

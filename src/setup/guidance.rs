use std::io::{self, Write};

use super::{DOMAIN_CLIENT_PORT, DOMAIN_SERVER_PORT, ENV_FILE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainSuggestion {
    pub client: String,
    pub server: String,
}

impl DomainSuggestion {
    pub fn for_address(addr: &str) -> Self {
        DomainSuggestion {
            client: format!("http://{}:{}", addr, DOMAIN_CLIENT_PORT),
            server: format!("http://{}:{}", addr, DOMAIN_SERVER_PORT),
        }
    }
}

pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "🚀 Setting up One Ring for development...\n")
}

/// Lists detected addresses and suggests DOMAIN_* lines built from the first.
pub fn write_network_guidance<W: Write>(out: &mut W, addresses: &[String]) -> io::Result<()> {
    writeln!(out, "🌐 Network Configuration:")?;

    match addresses.first() {
        Some(first) => {
            writeln!(out, "   Detected IP addresses:")?;
            for addr in addresses {
                writeln!(out, "   - {}", addr)?;
            }
            let suggestion = DomainSuggestion::for_address(first);
            writeln!(
                out,
                "\n   Update your {} file with one of these IP addresses:",
                ENV_FILE
            )?;
            writeln!(out, "   DOMAIN_CLIENT={}", suggestion.client)?;
            writeln!(out, "   DOMAIN_SERVER={}", suggestion.server)?;
        }
        None => {
            writeln!(out, "   No external IP addresses detected.")?;
            writeln!(
                out,
                "   You may need to manually configure DOMAIN_CLIENT and DOMAIN_SERVER in {}",
                ENV_FILE
            )?;
        }
    }

    Ok(())
}

pub fn write_next_steps<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n📝 Next steps:")?;
    writeln!(
        out,
        "   1. Edit {} and replace YOUR_SERVER_IP with your actual server IP",
        ENV_FILE
    )?;
    writeln!(out, "   2. Add your AI provider API keys to {}", ENV_FILE)?;
    writeln!(out, "   3. Run: npm run dev:full")?;
    writeln!(out, "\n🎉 Happy coding!")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::setup::network::{discover_addresses, iface, FakeInterfaces};

    fn render(addresses: &[String]) -> Result<String> {
        let mut out = Vec::new();
        write_network_guidance(&mut out, addresses)?;
        write_next_steps(&mut out)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    #[test]
    fn test_suggestion_ports() {
        let suggestion = DomainSuggestion::for_address("192.168.1.5");

        assert_eq!(suggestion.client, "http://192.168.1.5:3090");
        assert_eq!(suggestion.server, "http://192.168.1.5:3080");
    }

    #[test]
    fn test_guidance_uses_first_address() -> Result<()> {
        let provider = FakeInterfaces(vec![
            iface("lo", "127.0.0.1", true),
            iface("eth0", "192.168.1.5", false),
            iface("eth1", "fe80::1", false),
        ]);
        let output = render(&discover_addresses(&provider))?;

        assert!(output.contains("   Detected IP addresses:\n   - 192.168.1.5\n"));
        assert!(output.contains("   DOMAIN_CLIENT=http://192.168.1.5:3090\n"));
        assert!(output.contains("   DOMAIN_SERVER=http://192.168.1.5:3080\n"));
        assert!(!output.contains("fe80"));
        assert!(!output.contains("127.0.0.1"));
        Ok(())
    }

    #[test]
    fn test_guidance_lists_all_but_suggests_first() -> Result<()> {
        let output = render(&["10.0.0.7".to_owned(), "192.168.1.5".to_owned()])?;

        assert!(output.contains("   - 10.0.0.7\n   - 192.168.1.5\n"));
        assert!(output.contains("DOMAIN_CLIENT=http://10.0.0.7:3090"));
        assert!(output.contains("DOMAIN_SERVER=http://10.0.0.7:3080"));
        Ok(())
    }

    #[test]
    fn test_guidance_without_addresses() -> Result<()> {
        let output = render(&[])?;

        assert!(output.contains("   No external IP addresses detected.\n"));
        assert!(output.contains(
            "   You may need to manually configure DOMAIN_CLIENT and DOMAIN_SERVER in .env\n"
        ));
        assert!(!output.contains("DOMAIN_CLIENT=http"));
        assert!(output.ends_with("\n🎉 Happy coding!\n"));
        Ok(())
    }

    #[test]
    fn test_next_steps_text() -> Result<()> {
        let mut out = Vec::new();
        write_next_steps(&mut out)?;

        assert_eq!(
            String::from_utf8_lossy(&out),
            "\n📝 Next steps:\n\
             \x20  1. Edit .env and replace YOUR_SERVER_IP with your actual server IP\n\
             \x20  2. Add your AI provider API keys to .env\n\
             \x20  3. Run: npm run dev:full\n\
             \n🎉 Happy coding!\n"
        );
        Ok(())
    }
}

use std::io::Write;

use futures::future::join_all;

use super::probe::{check_port, ProbeStatus};
use super::{CheckerConfig, ServiceDescriptor};

const SEPARATOR_WIDTH: usize = 50;

#[derive(Debug, Clone)]
pub struct ServiceStatus {
    pub service: ServiceDescriptor,
    pub status: ProbeStatus,
}

#[derive(Debug, Clone)]
pub struct CheckReport {
    pub statuses: Vec<ServiceStatus>,
}

impl CheckReport {
    pub fn all_running(&self) -> bool {
        self.statuses.iter().all(|s| s.status.is_reachable())
    }
}

/// Probes every configured service once, all at the same time.
///
/// `join_all` hands results back in input order, so the report always lists
/// services the way the config does no matter which probe finishes first.
pub async fn check_services(config: &CheckerConfig) -> CheckReport {
    let probes = config.services.iter().map(|service| {
        let timeout = config.timeout;
        async move {
            let status = check_port(&service.host, service.port, timeout).await;
            ServiceStatus {
                service: service.clone(),
                status,
            }
        }
    });

    CheckReport {
        statuses: join_all(probes).await,
    }
}

pub fn write_report<W: Write>(out: &mut W, report: &CheckReport) -> std::io::Result<()> {
    writeln!(out, "🔍 Checking One Ring development services...\n")?;

    for entry in &report.statuses {
        let status = match entry.status {
            ProbeStatus::Reachable => "✅ Running",
            ProbeStatus::Unreachable => "❌ Not running",
        };
        writeln!(out, "{} - {} ({})", status, entry.service.name, entry.service)?;
    }

    writeln!(out, "\n{}", "=".repeat(SEPARATOR_WIDTH))?;

    if report.all_running() {
        writeln!(out, "🎉 All services are running! You can start development with:")?;
        writeln!(out, "   npm run dev")?;
    } else {
        writeln!(out, "⚠️  Some services are not running. Start them with:")?;
        writeln!(out, "   npm run dev:services")?;
        writeln!(out, "\nOr start everything at once with:")?;
        writeln!(out, "   npm run dev:full")?;
    }

    writeln!(out, "\n📖 For more information, see DEVELOPMENT.md")?;
    Ok(())
}

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    import_requests: AtomicU64,
    imported_pulls: AtomicU64,
    duplicate_pulls: AtomicU64,
    malformed_records: AtomicU64,
    import_errors: AtomicU64,
    derivations: AtomicU64,
    catalog_reloads: AtomicU64,
}

impl Metrics {
    pub fn record_import(&self, imported: usize, duplicates: usize, malformed: usize) {
        self.import_requests.fetch_add(1, Ordering::Relaxed);
        self.imported_pulls
            .fetch_add(imported as u64, Ordering::Relaxed);
        self.duplicate_pulls
            .fetch_add(duplicates as u64, Ordering::Relaxed);
        self.malformed_records
            .fetch_add(malformed as u64, Ordering::Relaxed);
    }

    pub fn record_import_error(&self) {
        self.import_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_derivation(&self) {
        self.derivations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_catalog_reload(&self) {
        self.catalog_reloads.fetch_add(1, Ordering::Relaxed);
    }

    pub fn render_prometheus(&self) -> String {
        let counters = [
            ("warplog_import_requests_total", &self.import_requests),
            ("warplog_imported_pulls_total", &self.imported_pulls),
            ("warplog_duplicate_pulls_total", &self.duplicate_pulls),
            ("warplog_malformed_records_total", &self.malformed_records),
            ("warplog_import_errors_total", &self.import_errors),
            ("warplog_derivations_total", &self.derivations),
            ("warplog_catalog_reloads_total", &self.catalog_reloads),
        ];
        let mut out = String::new();
        for (name, counter) in counters {
            out.push_str(&format!(
                "# TYPE {name} counter\n{name} {}\n",
                counter.load(Ordering::Relaxed)
            ));
        }
        out
    }
}

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use flightdeck_core::{Flight, Gate, Passenger, Route};

/// A record type with a fixed CSV layout.
pub trait TabularRecord {
    /// Header row for the table.
    const HEADER: &'static [&'static str];

    /// The rendered fields of one row, in header order.
    fn fields(&self) -> Vec<String>;
}

/// Write a table with its header row, returning the bytes written.
pub fn write_table<R: TabularRecord>(path: &Path, rows: &[R]) -> Result<u64, csv::Error> {
    let writer = BufWriter::new(File::create(path).map_err(csv::Error::from)?);
    let counting = CountingWriter::new(writer);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(counting);

    writer.write_record(R::HEADER)?;
    for row in rows {
        writer.write_record(row.fields())?;
    }

    writer.flush()?;
    let counting = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(counting.bytes_written())
}

impl TabularRecord for Flight {
    const HEADER: &'static [&'static str] = &[
        "id",
        "airline",
        "origin",
        "destination",
        "departure",
        "arrival",
        "gate",
        "price",
        "seats",
        "status",
    ];

    fn fields(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.airline.clone(),
            self.origin.clone(),
            self.destination.clone(),
            self.departure.format("%H:%M").to_string(),
            self.arrival.format("%H:%M").to_string(),
            self.gate.clone().unwrap_or_default(),
            format!("{:.2}", self.price),
            self.seats.to_string(),
            self.status.as_str().to_string(),
        ]
    }
}

impl TabularRecord for Gate {
    const HEADER: &'static [&'static str] = &["gate_number", "terminal", "status", "flight_id"];

    fn fields(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.terminal.to_string(),
            self.status.as_str().to_string(),
            self.flight_id.clone().unwrap_or_default(),
        ]
    }
}

impl TabularRecord for Passenger {
    const HEADER: &'static [&'static str] =
        &["pnr", "name", "email", "flight_id", "seat", "checked_in"];

    fn fields(&self) -> Vec<String> {
        vec![
            self.pnr.clone(),
            self.name.clone(),
            self.email.clone(),
            self.flight_id.clone(),
            self.seat.clone(),
            u8::from(self.checked_in).to_string(),
        ]
    }
}

impl TabularRecord for Route {
    const HEADER: &'static [&'static str] =
        &["from", "to", "distance", "price", "duration", "flight_id"];

    fn fields(&self) -> Vec<String> {
        vec![
            self.origin.clone(),
            self.destination.clone(),
            self.distance.to_string(),
            format!("{:.2}", self.price),
            self.duration.to_string(),
            self.flight_id.clone(),
        ]
    }
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

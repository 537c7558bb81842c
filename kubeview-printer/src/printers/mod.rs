pub mod configmap;
pub mod cronjob;
pub mod daemonset;
pub mod deployment;
pub mod horizontalpodautoscaler;
pub mod ingress;
pub mod job;
pub mod namespace;
pub mod persistentvolumeclaim;
pub mod printer;
pub mod replicaset;
pub mod secret;
pub mod service;
pub mod serviceaccount;
pub mod statefulset;

mod kind;

#[cfg(test)]
pub(crate) mod testing;

pub use kind::{printer_for, PrinterKind};
pub use printer::{Configuration, Printer};

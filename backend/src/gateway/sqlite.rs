use super::{schema, PersistenceGateway};
use anyhow::{anyhow, Context};
use common::model::{Appointment, Doctor, Patient};
use common::requests::{NewAppointment, NewDoctor, NewPatient};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

const APPOINTMENT_COLUMNS: &str = "a.id, a.date, a.patient_id, a.doctor_id";
const PATIENT_COLUMNS: &str = "p.id, p.name, p.age, p.gender, p.contact, p.disease";
const DOCTOR_COLUMNS: &str = "d.id, d.name, d.specialization, d.available_slots";

/// SQLite-backed gateway holding a single connection.
///
/// Calls are serialized through the mutex; handlers run them on the blocking
/// pool so the async workers never wait on the lock.
pub struct SqliteGateway {
    conn: Mutex<Connection>,
}

impl SqliteGateway {
    /// Opens (or creates) the database file at `path`. The special path
    /// `:memory:` gives a private in-memory store.
    pub fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let conn = if path == Path::new(":memory:") {
            Connection::open_in_memory()
        } else {
            Connection::open(path)
        }
        .with_context(|| format!("opening database {}", path.display()))?;
        Self::with_connection(conn)
    }

    pub fn in_memory() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory().context("opening in-memory database")?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> anyhow::Result<Self> {
        schema::init(&conn).context("initializing schema")?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> anyhow::Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| anyhow!("database connection lock poisoned"))
    }
}

fn patient_at(row: &Row, at: usize) -> rusqlite::Result<Patient> {
    Ok(Patient {
        id: row.get(at)?,
        name: row.get(at + 1)?,
        age: row.get(at + 2)?,
        gender: row.get(at + 3)?,
        contact: row.get(at + 4)?,
        disease: row.get(at + 5)?,
        appointments: None,
    })
}

fn doctor_at(row: &Row, at: usize) -> rusqlite::Result<Doctor> {
    Ok(Doctor {
        id: row.get(at)?,
        name: row.get(at + 1)?,
        specialization: row.get(at + 2)?,
        available_slots: row.get(at + 3)?,
        appointments: None,
    })
}

fn appointment_at(row: &Row, at: usize) -> rusqlite::Result<Appointment> {
    Ok(Appointment {
        id: row.get(at)?,
        date: row.get(at + 1)?,
        patient_id: row.get(at + 2)?,
        doctor_id: row.get(at + 3)?,
        patient: None,
        doctor: None,
    })
}

fn appointment_with_doctor(row: &Row) -> rusqlite::Result<Appointment> {
    let mut appointment = appointment_at(row, 0)?;
    appointment.doctor = Some(Box::new(doctor_at(row, 4)?));
    Ok(appointment)
}

fn appointment_with_patient(row: &Row) -> rusqlite::Result<Appointment> {
    let mut appointment = appointment_at(row, 0)?;
    appointment.patient = Some(Box::new(patient_at(row, 4)?));
    Ok(appointment)
}

fn appointment_with_both(row: &Row) -> rusqlite::Result<Appointment> {
    let mut appointment = appointment_at(row, 0)?;
    appointment.patient = Some(Box::new(patient_at(row, 4)?));
    appointment.doctor = Some(Box::new(doctor_at(row, 10)?));
    Ok(appointment)
}

/// Appointments with their doctor, for one patient or (with `None`) for all.
fn appointments_with_doctor(
    conn: &Connection,
    patient_id: Option<i64>,
) -> rusqlite::Result<Vec<Appointment>> {
    let sql = format!(
        "SELECT {APPOINTMENT_COLUMNS}, {DOCTOR_COLUMNS}
         FROM appointments a JOIN doctors d ON d.id = a.doctor_id
         WHERE ?1 IS NULL OR a.patient_id = ?1
         ORDER BY a.id"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![patient_id], appointment_with_doctor)?;
    rows.collect()
}

/// Appointments with their patient, for one doctor or (with `None`) for all.
fn appointments_with_patient(
    conn: &Connection,
    doctor_id: Option<i64>,
) -> rusqlite::Result<Vec<Appointment>> {
    let sql = format!(
        "SELECT {APPOINTMENT_COLUMNS}, {PATIENT_COLUMNS}
         FROM appointments a JOIN patients p ON p.id = a.patient_id
         WHERE ?1 IS NULL OR a.doctor_id = ?1
         ORDER BY a.id"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![doctor_id], appointment_with_patient)?;
    rows.collect()
}

/// Appointments with both relations, one by id or (with `None`) all of them.
fn appointments_with_both(
    conn: &Connection,
    appointment_id: Option<i64>,
) -> rusqlite::Result<Vec<Appointment>> {
    let sql = format!(
        "SELECT {APPOINTMENT_COLUMNS}, {PATIENT_COLUMNS}, {DOCTOR_COLUMNS}
         FROM appointments a
         JOIN patients p ON p.id = a.patient_id
         JOIN doctors d ON d.id = a.doctor_id
         WHERE ?1 IS NULL OR a.id = ?1
         ORDER BY a.id"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![appointment_id], appointment_with_both)?;
    rows.collect()
}

fn group_by(
    appointments: Vec<Appointment>,
    key: fn(&Appointment) -> i64,
) -> HashMap<i64, Vec<Appointment>> {
    let mut grouped: HashMap<i64, Vec<Appointment>> = HashMap::new();
    for appointment in appointments {
        grouped.entry(key(&appointment)).or_default().push(appointment);
    }
    grouped
}

impl PersistenceGateway for SqliteGateway {
    fn create_patient(&self, input: &NewPatient) -> anyhow::Result<Patient> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO patients (name, age, gender, contact, disease) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![input.name, input.age, input.gender, input.contact, input.disease],
        )
        .context("inserting patient")?;

        Ok(Patient {
            id: conn.last_insert_rowid(),
            name: input.name.clone(),
            age: input.age,
            gender: input.gender.clone(),
            contact: input.contact.clone(),
            disease: input.disease.clone(),
            appointments: None,
        })
    }

    fn list_patients(&self) -> anyhow::Result<Vec<Patient>> {
        let conn = self.conn()?;
        let mut stmt = conn
            .prepare(&format!("SELECT {PATIENT_COLUMNS} FROM patients p ORDER BY p.id"))
            .context("preparing patient list")?;
        let mut patients = stmt
            .query_map([], |row| patient_at(row, 0))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("loading patients")?;

        let appointments =
            appointments_with_doctor(&conn, None).context("loading patient appointments")?;
        let mut grouped = group_by(appointments, |a| a.patient_id);
        for patient in &mut patients {
            patient.appointments = Some(grouped.remove(&patient.id).unwrap_or_default());
        }
        Ok(patients)
    }

    fn find_patient(&self, id: i64) -> anyhow::Result<Option<Patient>> {
        let conn = self.conn()?;
        let patient = conn
            .query_row(
                &format!("SELECT {PATIENT_COLUMNS} FROM patients p WHERE p.id = ?1"),
                params![id],
                |row| patient_at(row, 0),
            )
            .optional()
            .with_context(|| format!("loading patient {}", id))?;

        match patient {
            Some(mut patient) => {
                patient.appointments = Some(
                    appointments_with_doctor(&conn, Some(id))
                        .with_context(|| format!("loading appointments of patient {}", id))?,
                );
                Ok(Some(patient))
            }
            None => Ok(None),
        }
    }

    fn create_doctor(&self, input: &NewDoctor) -> anyhow::Result<Doctor> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO doctors (name, specialization, available_slots) VALUES (?1, ?2, ?3)",
            params![input.name, input.specialization, input.available_slots],
        )
        .context("inserting doctor")?;

        Ok(Doctor {
            id: conn.last_insert_rowid(),
            name: input.name.clone(),
            specialization: input.specialization.clone(),
            available_slots: input.available_slots,
            appointments: None,
        })
    }

    fn list_doctors(&self) -> anyhow::Result<Vec<Doctor>> {
        let conn = self.conn()?;
        let mut stmt = conn
            .prepare(&format!("SELECT {DOCTOR_COLUMNS} FROM doctors d ORDER BY d.id"))
            .context("preparing doctor list")?;
        let mut doctors = stmt
            .query_map([], |row| doctor_at(row, 0))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("loading doctors")?;

        let appointments =
            appointments_with_patient(&conn, None).context("loading doctor appointments")?;
        let mut grouped = group_by(appointments, |a| a.doctor_id);
        for doctor in &mut doctors {
            doctor.appointments = Some(grouped.remove(&doctor.id).unwrap_or_default());
        }
        Ok(doctors)
    }

    fn find_doctor(&self, id: i64) -> anyhow::Result<Option<Doctor>> {
        let conn = self.conn()?;
        let doctor = conn
            .query_row(
                &format!("SELECT {DOCTOR_COLUMNS} FROM doctors d WHERE d.id = ?1"),
                params![id],
                |row| doctor_at(row, 0),
            )
            .optional()
            .with_context(|| format!("loading doctor {}", id))?;

        match doctor {
            Some(mut doctor) => {
                doctor.appointments = Some(
                    appointments_with_patient(&conn, Some(id))
                        .with_context(|| format!("loading appointments of doctor {}", id))?,
                );
                Ok(Some(doctor))
            }
            None => Ok(None),
        }
    }

    fn create_appointment(&self, input: &NewAppointment) -> anyhow::Result<Appointment> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO appointments (date, patient_id, doctor_id) VALUES (?1, ?2, ?3)",
            params![input.date, input.patient_id, input.doctor_id],
        )
        .with_context(|| {
            format!(
                "inserting appointment for patient {} with doctor {}",
                input.patient_id, input.doctor_id
            )
        })?;

        let id = conn.last_insert_rowid();
        appointments_with_both(&conn, Some(id))
            .context("reloading created appointment")?
            .pop()
            .ok_or_else(|| anyhow!("appointment {} vanished after insert", id))
    }

    fn list_appointments(&self) -> anyhow::Result<Vec<Appointment>> {
        let conn = self.conn()?;
        appointments_with_both(&conn, None).context("loading appointments")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> NewPatient {
        NewPatient {
            name: "Jane".into(),
            age: 30,
            gender: "Female".into(),
            contact: "555-1234".into(),
            disease: "Flu".into(),
        }
    }

    fn smith() -> NewDoctor {
        NewDoctor {
            name: "Smith".into(),
            specialization: "Cardiology".into(),
            available_slots: 5,
        }
    }

    #[test]
    fn ids_are_assigned_in_order() {
        let gateway = SqliteGateway::in_memory().unwrap();
        let first = gateway.create_patient(&jane()).unwrap();
        let second = gateway.create_patient(&jane()).unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(first.appointments.is_none());
    }

    #[test]
    fn lists_embed_relations_in_both_directions() {
        let gateway = SqliteGateway::in_memory().unwrap();
        let patient = gateway.create_patient(&jane()).unwrap();
        let lonely = gateway.create_patient(&jane()).unwrap();
        let doctor = gateway.create_doctor(&smith()).unwrap();
        gateway
            .create_appointment(&NewAppointment {
                patient_id: patient.id,
                doctor_id: doctor.id,
                date: "2025-06-01".into(),
            })
            .unwrap();

        let patients = gateway.list_patients().unwrap();
        assert_eq!(patients.len(), 2);
        let booked = &patients[0].appointments.as_ref().unwrap()[0];
        assert_eq!(booked.doctor.as_ref().unwrap().name, "Smith");
        assert!(booked.patient.is_none());
        assert_eq!(patients[1].id, lonely.id);
        assert_eq!(patients[1].appointments, Some(vec![]));

        let doctors = gateway.list_doctors().unwrap();
        let booked = &doctors[0].appointments.as_ref().unwrap()[0];
        assert_eq!(booked.patient.as_ref().unwrap().name, "Jane");
        assert!(booked.doctor.is_none());
        assert_eq!(doctors[0].available_slots, 5);
    }

    #[test]
    fn find_returns_none_for_unknown_ids() {
        let gateway = SqliteGateway::in_memory().unwrap();
        assert!(gateway.find_patient(1).unwrap().is_none());
        assert!(gateway.find_doctor(-4).unwrap().is_none());
    }

    #[test]
    fn foreign_keys_are_enforced() {
        let gateway = SqliteGateway::in_memory().unwrap();
        let doctor = gateway.create_doctor(&smith()).unwrap();
        let result = gateway.create_appointment(&NewAppointment {
            patient_id: 99,
            doctor_id: doctor.id,
            date: "2025-06-01".into(),
        });
        assert!(result.is_err());
        assert!(gateway.list_appointments().unwrap().is_empty());
    }

    #[test]
    fn created_appointment_carries_both_relations() {
        let gateway = SqliteGateway::in_memory().unwrap();
        let patient = gateway.create_patient(&jane()).unwrap();
        let doctor = gateway.create_doctor(&smith()).unwrap();
        let appointment = gateway
            .create_appointment(&NewAppointment {
                patient_id: patient.id,
                doctor_id: doctor.id,
                date: "2025-06-01T09:15".into(),
            })
            .unwrap();
        assert_eq!(appointment.date, "2025-06-01T09:15");
        assert_eq!(appointment.patient.unwrap().id, patient.id);
        assert_eq!(appointment.doctor.unwrap().id, doctor.id);
    }
}

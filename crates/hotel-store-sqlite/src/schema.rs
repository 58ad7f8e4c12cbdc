//! SQL schema for the hotel SQLite store.
//!
//! Executed on every connection open. Each statement is guarded with
//! `IF NOT EXISTS`, so re-running it against an existing file is a no-op.
//! Tables are created parents first so every foreign key target exists
//! before the table that references it.

/// Full schema DDL; idempotent thanks to `CREATE ... IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS Hotel_Chains (
    central_office_address TEXT PRIMARY KEY,
    chain_name             TEXT,
    num_hotels             INTEGER,
    email_address          TEXT,
    phone_number           TEXT
);

CREATE TABLE IF NOT EXISTS Hotels (
    hotel_address          TEXT PRIMARY KEY,
    central_office_address TEXT,   -- NULL for hotels outside any chain
    area                   TEXT,
    star_rating            INTEGER,
    num_rooms              INTEGER,
    contact_info           TEXT,
    FOREIGN KEY (central_office_address) REFERENCES Hotel_Chains(central_office_address)
);

CREATE TABLE IF NOT EXISTS Employees (
    employee_id   INTEGER PRIMARY KEY,
    supervisor_id INTEGER,
    hotel_address TEXT,
    full_name     TEXT,
    position      TEXT,
    FOREIGN KEY (hotel_address) REFERENCES Hotels(hotel_address),
    FOREIGN KEY (supervisor_id) REFERENCES Employees(employee_id)
);

-- extendability is stored as 1 / 0.
CREATE TABLE IF NOT EXISTS Hotel_Rooms (
    hotel_address TEXT,
    room_number   INTEGER,
    capacity      INTEGER,
    view_type     TEXT,
    extendability INTEGER,
    price         DECIMAL,
    damages       TEXT,
    amenities     TEXT,
    PRIMARY KEY (hotel_address, room_number),
    FOREIGN KEY (hotel_address) REFERENCES Hotels(hotel_address)
);

CREATE TABLE IF NOT EXISTS Customers (
    customer_id              INTEGER PRIMARY KEY,
    full_name                TEXT,
    address                  TEXT,
    system_registration_date DATE   -- YYYY-MM-DD
);

-- check_out_date is deliberately outside the key.
CREATE TABLE IF NOT EXISTS Reservations (
    customer_id    INTEGER,
    hotel_address  TEXT,
    room_number    INTEGER,
    check_in_date  DATE,
    check_out_date DATE,
    PRIMARY KEY (customer_id, hotel_address, room_number, check_in_date),
    FOREIGN KEY (customer_id) REFERENCES Customers(customer_id),
    FOREIGN KEY (hotel_address, room_number) REFERENCES Hotel_Rooms(hotel_address, room_number)
);

-- Append-only. No keys, so rows outlive the reservations they copy.
CREATE TABLE IF NOT EXISTS Booking_History (
    customer_id    INTEGER,
    hotel_address  TEXT,
    room_number    INTEGER,
    check_in_date  DATE,
    check_out_date DATE
);

CREATE INDEX IF NOT EXISTS idx_room_nums    ON Hotel_Rooms (hotel_address, room_number);
CREATE INDEX IF NOT EXISTS idx_reservations ON Reservations (hotel_address, room_number, check_in_date, check_out_date);
CREATE INDEX IF NOT EXISTS idx_hotel        ON Hotels (area);

CREATE TRIGGER IF NOT EXISTS archive_booking
AFTER INSERT ON Reservations
BEGIN
    INSERT INTO Booking_History (
        customer_id, hotel_address, room_number, check_in_date, check_out_date
    ) VALUES (
        NEW.customer_id, NEW.hotel_address, NEW.room_number, NEW.check_in_date, NEW.check_out_date
    );
END;

CREATE TRIGGER IF NOT EXISTS delete_room_reservations
BEFORE DELETE ON Hotel_Rooms
BEGIN
    DELETE FROM Reservations
    WHERE hotel_address = OLD.hotel_address AND room_number = OLD.room_number;
END;

CREATE TRIGGER IF NOT EXISTS delete_customer
BEFORE DELETE ON Customers
BEGIN
    DELETE FROM Reservations
    WHERE customer_id = OLD.customer_id;
END;
";
